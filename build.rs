fn main() {
    // Forward ESP-IDF sysenv (link args, include paths) only when the
    // espidf feature is active; host test builds skip it entirely.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
