/// Port for looking up template sources by id.
pub trait TemplateStore {
    /// All template ids this store can serve, sorted.
    fn template_ids(&self) -> Vec<String>;

    /// Template source for `id`, if present.
    fn template(&self, id: &str) -> Option<String>;
}
