fn main() {
    siteup::app::cli::run();
}
