use std::fs;

use anyhow::{Context, Result, bail};
use folio::gallery::{self, GalleryView};
use folio::reveal::RevealConfig;

pub fn run(data: &str, out: &str, threshold: f64, stagger_ms: u64) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        bail!("threshold must be between 0 and 1, got {threshold}");
    }

    let config = RevealConfig { threshold, stagger_ms };
    let view = gallery::build_view(data, config);
    let page = gallery::render_page(&view, config);

    fs::write(out, page).with_context(|| format!("failed to write {out}"))?;

    match view {
        GalleryView::Cards(cards) => println!("Rendered {} project(s) to {out}", cards.len()),
        GalleryView::Failed(_) => println!("Could not load projects from {data}; wrote error page to {out}"),
    }

    Ok(())
}
