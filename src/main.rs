fn main() {
    plinth::app::cli::run();
}
