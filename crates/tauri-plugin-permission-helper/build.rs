const COMMANDS: &[&str] = &["open_app_settings"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
