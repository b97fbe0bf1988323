#[path = "build/config.rs"]
mod build_config;

fn main() {
    build_config::config::Cfgs::new().apply();
}
