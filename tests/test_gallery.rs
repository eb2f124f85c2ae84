mod common;

use std::fs;

use folio::FolioError;
use folio::gallery::*;
use folio::project::{Project, parse_projects};
use folio::reveal::{RevealConfig, RevealObserver};

const DATA: &str = r#"[
  {
    "title": "Alpha",
    "description": "First project",
    "githubUrl": "https://github.com/alice/alpha",
    "liveUrl": "https://alpha.example.com",
    "videoUrl": "https://cdn.example.com/alpha.mp4",
    "tags": ["Rust", "WASM"]
  },
  {
    "title": "Beta",
    "description": "Second project",
    "githubUrl": "https://github.com/alice/beta",
    "liveUrl": "",
    "tags": ["Go"]
  },
  {
    "title": "Gamma",
    "description": "Third project",
    "githubUrl": "https://github.com/alice/gamma",
    "tags": []
  }
]"#;

fn projects() -> Vec<Project> {
    parse_projects(DATA).unwrap()
}

fn cards() -> Vec<Card> {
    let mut observer = RevealObserver::new(RevealConfig::default());
    render_gallery(&projects(), &mut observer)
}

#[test]
fn test_one_card_per_record_in_order() {
    let titles: Vec<String> = cards().into_iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn test_cards_are_staggered() {
    let delays: Vec<u64> = cards().iter().map(|c| c.delay_ms).collect();
    assert_eq!(delays, vec![0, 100, 200]);
}

#[test]
fn test_render_registers_cards_with_observer() {
    let mut observer = RevealObserver::new(RevealConfig::default());
    render_gallery(&projects(), &mut observer);
    assert_eq!(observer.pending(), 3);
}

#[test]
fn test_empty_live_url_is_absent() {
    let cards = cards();
    assert!(cards[0].live_url.is_some());
    assert_eq!(cards[1].live_url, None);
    assert_eq!(cards[2].live_url, None);
}

#[test]
fn test_card_html_live_link() {
    let cards = cards();
    assert!(card_html(&cards[0]).contains(r#"aria-label="Live Demo""#));
    assert!(!card_html(&cards[1]).contains("Live Demo"));
    assert!(card_html(&cards[1]).contains(r#"aria-label="GitHub Code""#));
}

#[test]
fn test_card_html_video_block() {
    let cards = cards();
    let with_video = card_html(&cards[0]);
    assert!(with_video.contains("video-container"));
    assert!(with_video.contains(r#"<source src="https://cdn.example.com/alpha.mp4" type="video/mp4">"#));
    assert!(!card_html(&cards[1]).contains("<video"));
}

#[test]
fn test_card_html_tags_as_spans() {
    let cards = cards();
    assert!(card_html(&cards[0]).contains("<footer><span>Rust</span><span>WASM</span></footer>"));
    assert!(card_html(&cards[2]).contains("<footer></footer>"));
}

#[test]
fn test_card_html_escapes_text() {
    let mut card = cards().remove(0);
    card.title = "<script>alert(1)</script>".into();
    let html = card_html(&card);
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_grid_html_failed_has_single_message() {
    let view = GalleryView::Failed("Could not load projects.".into());
    let html = grid_html(&view);
    assert_eq!(html.matches("error-message").count(), 1);
    assert!(!html.contains("project-card"));
}

#[test]
fn test_build_view_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");
    fs::write(&path, DATA).unwrap();

    match build_view(path.to_str().unwrap(), RevealConfig::default()) {
        GalleryView::Cards(cards) => assert_eq!(cards.len(), 3),
        GalleryView::Failed(msg) => panic!("unexpected failure: {msg}"),
    }
}

#[test]
fn test_build_view_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let view = build_view(path.to_str().unwrap(), RevealConfig::default());
    assert!(matches!(view, GalleryView::Failed(_)));
}

#[test]
fn test_build_view_malformed_json_renders_no_cards() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");
    fs::write(&path, r#"[{"title": "Half""#).unwrap();

    let view = build_view(path.to_str().unwrap(), RevealConfig::default());
    let page = render_page(&view, RevealConfig::default());
    assert!(page.contains("Could not load projects. Please check the console for details."));
    assert!(!page.contains("project-card reveal"));
}

#[test]
fn test_render_page_threshold_and_delays() {
    let config = RevealConfig { threshold: 0.25, stagger_ms: 50 };
    let mut observer = RevealObserver::new(config);
    let view = GalleryView::Cards(render_gallery(&projects(), &mut observer));
    let page = render_page(&view, config);

    assert!(page.contains("threshold: 0.25"));
    assert!(page.contains("transition-delay: 100ms"));
    assert_eq!(page.matches("project-card reveal").count(), 3);
}

#[test]
fn test_escape() {
    assert_eq!(escape(r#"a & "b" <c> 'd'"#), "a &amp; &quot;b&quot; &lt;c&gt; &#39;d&#39;");
}

#[test]
fn test_load_projects_from_url() {
    let base = common::serve(vec![(200, DATA.into())]);
    let projects = load_projects(&format!("{base}/database.json")).unwrap();
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[1].title, "Beta");
}

#[test]
fn test_load_projects_error_status() {
    let base = common::serve(vec![(503, String::new())]);
    let err = load_projects(&format!("{base}/database.json")).unwrap_err();
    assert!(matches!(err, FolioError::Status(503)));
    assert_eq!(err.to_string(), "HTTP error! status: 503");
}

#[test]
fn test_build_view_error_status_renders_no_cards() {
    let base = common::serve(vec![(404, String::new())]);
    let view = build_view(&format!("{base}/database.json"), RevealConfig::default());
    assert_eq!(view, GalleryView::Failed(folio::templates::LOAD_ERROR_MESSAGE.to_string()));
}
