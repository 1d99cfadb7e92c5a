fn main() {
    blob_templates::app::cli::run();
}
