use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cfg: &Config) -> AppResult<()> {
    if cfg.projects.is_empty() {
        warning("No projects configured: any project name is accepted.");
        return Ok(());
    }

    println!("📁 Projects:");
    for p in &cfg.projects {
        println!("  - {}", p);
    }
    Ok(())
}
