//! Show command: stored definition plus the URL a viewer would get.

use anyhow::Result;
use practice_core::config::PracticeConfig;
use practice_core::practice_db::PracticeDb;
use practice_core::resolver::resolve_url;
use practice_core::variables::VariableContext;
use std::path::Path;

use super::environment::load_environment;

pub async fn run_show(
    db: &PracticeDb,
    cfg: &PracticeConfig,
    id: i64,
    env_path: Option<&Path>,
) -> Result<()> {
    let practice = db.require_practice(id).await?;
    let env = load_environment(cfg, practice.course, env_path)?;
    let ctx = VariableContext::build(&env, &practice, cfg);

    println!("Practice {} ({})", practice.id, practice.name);
    println!("  course:        {}", practice.course);
    println!("  stored url:    {}", practice.external_url);
    println!("  display:       {}", practice.display);
    if practice.parameters.is_empty() {
        println!("  parameters:    (none)");
    } else {
        for p in &practice.parameters {
            let state = if ctx.contains(&p.variable) {
                ""
            } else {
                "  (unavailable, dropped)"
            };
            println!("  parameter:     {} = {}{}", p.name, p.variable, state);
        }
    }

    if !practice.has_usable_url() {
        println!("  resolved:      (invalid stored url)");
        return Ok(());
    }
    let resolved = resolve_url(&practice, &ctx, cfg.site_root());
    println!("  resolved:      {}", resolved.raw_url());
    println!("  effective:     {}", resolved.display);
    Ok(())
}
