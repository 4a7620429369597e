fn main() {
    #[cfg(target_arch = "wasm32")]
    workforce_frontend::start();
}
