//! Snapshot command handler

use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::presentation::{Color, GradientAnimation, Snapshot, View};

use super::presenter::Presenter;

/// Badge shown in the chat header: a dot and a bar, gradient-painted
pub fn badge(moving: Option<GradientAnimation>) -> View {
    let content = View::row(
        6.0,
        vec![
            View::ellipse(24.0, 24.0, Color::WHITE),
            View::column(
                4.0,
                vec![
                    View::rect(96.0, 10.0, Color::WHITE),
                    View::rect(64.0, 10.0, Color::WHITE),
                ],
            ),
        ],
    );

    match moving {
        Some(animation) => content.enchantify_moving_with(animation),
        None => content.enchantify(),
    }
    .padding(8.0)
}

/// Render the badge and write it as PNG
pub async fn handle_snapshot_command(
    out: &Path,
    scale: f32,
    moving: bool,
    after: Duration,
    presenter: &Presenter,
) -> Result<(), String> {
    let animation = moving.then(GradientAnimation::new);
    let view = badge(animation.clone());

    let started = view.appear();
    if !after.is_zero() {
        debug!(started, ?after, "Letting animation run");
        tokio::time::sleep(after).await;
    }

    let snapshot: Snapshot = view
        .render(scale)
        .ok_or_else(|| format!("Cannot render at scale {}", scale))?;
    snapshot.save_png(out).map_err(|e| e.to_string())?;

    let phase = animation
        .map(|a| format!(" at phase {:.2}", a.phase()))
        .unwrap_or_default();
    presenter.success(&format!(
        "Saved {}x{} snapshot{} to {}",
        snapshot.width(),
        snapshot.height(),
        phase,
        out.display()
    ));
    Ok(())
}
