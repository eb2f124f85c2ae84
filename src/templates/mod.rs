pub const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Projects</title>
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
<style>
"#;

pub const STYLESHEET: &str = r#":root {
  --bg-color: #0a192f;
  --card-color: #112240;
  --heading-color: #ccd6f6;
  --text-color: #8892b0;
  --primary-color: #64ffda;
}
body { background: var(--bg-color); color: var(--text-color); font-family: system-ui, sans-serif; margin: 0; }
main { max-width: 1100px; margin: 0 auto; padding: 4rem 1.5rem; }
#projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem; }
.project-card { background: var(--card-color); border-radius: 6px; padding: 1.75rem; display: flex; flex-direction: column; }
.project-card h3 { color: var(--heading-color); margin: 0.75rem 0; }
.project-card footer span { font-family: monospace; font-size: 0.8rem; margin-right: 0.9rem; }
.card-header { display: flex; justify-content: space-between; align-items: center; color: var(--primary-color); }
.card-links a { color: var(--heading-color); margin-left: 0.75rem; }
.video-container video { width: 100%; border-radius: 4px; margin-top: 1rem; }
.error-message { color: var(--primary-color); }
.reveal { opacity: 0; transform: translateY(24px); transition: opacity 0.6s ease, transform 0.6s ease; }
.reveal.visible { opacity: 1; transform: none; }
"#;

pub const PAGE_BODY_OPEN: &str = r#"</style>
</head>
<body>
<main>
<h2>Projects</h2>
<div id="projects-grid">
"#;

pub const PAGE_BODY_CLOSE: &str = r#"</div>
</main>
"#;

/// Observer script; `{threshold}` is substituted at render time.
pub const REVEAL_SCRIPT: &str = r#"<script>
const revealObserver = new IntersectionObserver((entries) => {
  entries.forEach((entry) => {
    if (entry.isIntersecting) {
      entry.target.classList.add('visible');
      revealObserver.unobserve(entry.target);
    }
  });
}, { threshold: {threshold} });
document.querySelectorAll('.reveal').forEach((el) => revealObserver.observe(el));
</script>
</body>
</html>
"#;

pub const LOAD_ERROR_MESSAGE: &str =
    "Could not load projects. Please check the console for details.";
