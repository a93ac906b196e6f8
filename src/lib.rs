mod commands;
mod generator;
mod models;
mod nutrition;
mod phase;
mod progression;
mod templates;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .invoke_handler(tauri::generate_handler![
      commands::generate_plan,
      commands::nutrition::get_nutrition_targets,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
