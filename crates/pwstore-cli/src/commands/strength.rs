use pwstore_core::evaluate_strength;

use crate::app::AppContext;
use crate::helpers::input::read_secret;
use crate::ui::kv;
use crate::ui::render::strength;

pub fn handle_strength(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui();
    let password = read_secret("Password")?;
    let result = evaluate_strength(&password);
    println!("{}", kv(&ui, "Score", &format!("{}/4", result.score)));
    println!("{}", kv(&ui, "Strength", &strength(&ui, &result)));
    Ok(())
}
