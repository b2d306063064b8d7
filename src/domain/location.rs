use std::fmt;
use std::path::{Component, Path, PathBuf};

use super::{AppError, naming};

/// Where a new project directory is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseLocation {
    Current,
    Desktop,
    Downloads,
    Documents,
    Custom,
}

impl BaseLocation {
    pub const ALL: [BaseLocation; 5] = [
        BaseLocation::Current,
        BaseLocation::Desktop,
        BaseLocation::Downloads,
        BaseLocation::Documents,
        BaseLocation::Custom,
    ];

    pub fn choices() -> Vec<String> {
        Self::ALL.iter().map(|location| location.choice_label().to_string()).collect()
    }

    pub fn choice_label(&self) -> &'static str {
        match self {
            BaseLocation::Current => "Current directory",
            BaseLocation::Desktop => "Desktop",
            BaseLocation::Downloads => "Downloads",
            BaseLocation::Documents => "Documents",
            BaseLocation::Custom => "Custom",
        }
    }

    pub fn from_choice(label: &str) -> Option<BaseLocation> {
        match label.trim().to_lowercase().as_str() {
            "current directory" | "current" | "." => Some(BaseLocation::Current),
            "desktop" => Some(BaseLocation::Desktop),
            "downloads" => Some(BaseLocation::Downloads),
            "documents" => Some(BaseLocation::Documents),
            "custom" => Some(BaseLocation::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for BaseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.choice_label())
    }
}

/// Resolved directories behind each non-custom [`BaseLocation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    pub current: PathBuf,
    pub desktop: PathBuf,
    pub downloads: PathBuf,
    pub documents: PathBuf,
}

impl Locations {
    /// Standard user folders under `home`.
    pub fn under_home(current: impl Into<PathBuf>, home: &Path) -> Self {
        Self {
            current: current.into(),
            desktop: home.join("Desktop"),
            downloads: home.join("Downloads"),
            documents: home.join("Documents"),
        }
    }

    fn base_for(&self, location: BaseLocation, custom_path: Option<&str>) -> Result<PathBuf, AppError> {
        match location {
            BaseLocation::Current => Ok(self.current.clone()),
            BaseLocation::Desktop => Ok(self.desktop.clone()),
            BaseLocation::Downloads => Ok(self.downloads.clone()),
            BaseLocation::Documents => Ok(self.documents.clone()),
            BaseLocation::Custom => match custom_path.map(str::trim) {
                Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
                _ => Err(AppError::Validation {
                    prompt: "customPath".into(),
                    message: "a custom location needs a path".into(),
                }),
            },
        }
    }

    /// Root directory of the generated project: base directory + PascalCase name.
    pub fn project_root(
        &self,
        name: &str,
        location: BaseLocation,
        custom_path: Option<&str>,
    ) -> Result<PathBuf, AppError> {
        let dir_name = project_dir_name(name)
            .map_err(|message| AppError::Validation { prompt: "name".into(), message })?;
        Ok(self.base_for(location, custom_path)?.join(dir_name))
    }
}

/// Directory name for a project: `pascal_case(name)`, which must be exactly
/// one plain path component so the project stays inside its base directory.
pub fn project_dir_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("project name must not be empty".to_string());
    }
    if trimmed.contains(['/', '\\']) {
        return Err(format!("project name '{trimmed}' must not contain path separators"));
    }

    let dir_name = naming::pascal_case(trimmed);
    let mut components = Path::new(&dir_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(dir_name),
        _ => Err(format!("project name '{trimmed}' is not a valid directory name")),
    }
}
