use anyhow::{Context, Result};
use engine::EngineContext;
use sideways::{MainLoop, Tuning};

fn main() -> Result<()> {
    engine::init_logging("warn,engine=info,sideways=info");

    let tuning = Tuning::builtin()?;

    // ---- Create engine context (game owns this) ----
    let ctx = EngineContext::new(tuning.window.clone()).context("failed to start event loop")?;
    ctx.run(|graphics| MainLoop::setup(graphics, &tuning))
        .context("game aborted")?;
    Ok(())
}
