//! Global CSS styles for the portfolio.
//!
//! Both themes are driven by custom properties on `:root`; the light theme
//! overrides them under `[data-theme="light"]`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --bg: #0f1115;
  --surface: #171a21;
  --border: #262a33;

  /* Text */
  --text: #e8eaf0;
  --text-muted: rgba(232, 234, 240, 0.6);

  /* Accents */
  --accent: #4f8cff;
  --accent-glow: rgba(79, 140, 255, 0.3);
  --success: #3ecf8e;
  --warning: #f5a524;
  --donate: #ffd500;

  /* Skeleton shimmer */
  --skeleton-base: #1f232c;
  --skeleton-shine: #2a2f3a;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;
  --text-2xl: 2.5rem;

  /* Layout */
  --header-height: 80px;
  --radius: 12px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-progress: 1s cubic-bezier(0.4, 0, 0.2, 1);
}

[data-theme="light"] {
  --bg: #f6f7fb;
  --surface: #ffffff;
  --border: #dde1ea;
  --text: #1b1e26;
  --text-muted: rgba(27, 30, 38, 0.6);
  --skeleton-base: #e6e9f0;
  --skeleton-shine: #f1f3f8;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.6;
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: var(--accent);
  text-decoration: none;
}

.app:focus {
  outline: none;
}

/* === Header === */
.nav-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 2rem;
  padding: 0 2rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
  z-index: 100;
}

.nav-brand {
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--text);
}

.nav-links {
  display: flex;
  gap: 1.5rem;
  margin-left: auto;
}

.nav-link {
  color: var(--text-muted);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--text);
}

.nav-link-donate {
  color: var(--donate);
}

.icon-btn {
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 50%;
  width: 40px;
  height: 40px;
  cursor: pointer;
  color: var(--text);
  font-size: var(--text-lg);
  transition: border-color var(--transition-fast);
}

.icon-btn:hover {
  border-color: var(--accent);
}

/* === Sections === */
.page {
  padding-top: var(--header-height);
  max-width: 1200px;
  margin: 0 auto;
  padding-left: 2rem;
  padding-right: 2rem;
}

.hero {
  padding: 4rem 0 3rem;
  text-align: center;
}

.hero-title {
  font-size: var(--text-2xl);
  font-weight: 800;
}

.hero-subtitle {
  color: var(--text-muted);
  margin-top: 0.75rem;
}

.section-title {
  font-size: var(--text-xl);
  margin-bottom: 1.5rem;
}

/* === Project Grid === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 1.5rem;
}

.empty-state {
  grid-column: 1 / -1;
  text-align: center;
  color: var(--text-muted);
  padding: 3rem 0;
}

.project-card {
  position: relative;
  display: flex;
  flex-direction: column;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast), border-color var(--transition-fast);
}

.project-card:hover,
.project-card:focus-visible {
  transform: translateY(-4px);
  border-color: var(--accent);
  box-shadow: 0 8px 24px var(--accent-glow);
  outline: none;
}

.project-card.featured {
  border-color: var(--accent);
}

.project-card-soon {
  cursor: default;
  border-style: dashed;
}

.project-card-soon:hover {
  transform: none;
  box-shadow: none;
}

.project-new-badge {
  position: absolute;
  top: 12px;
  right: 12px;
  padding: 2px 10px;
  border-radius: 999px;
  background: var(--warning);
  color: #1b1e26;
  font-size: var(--text-sm);
  font-weight: 700;
  z-index: 1;
}

.project-image-container {
  aspect-ratio: 16 / 9;
  overflow: hidden;
}

.project-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.project-content {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.25rem;
  flex: 1;
}

.project-title {
  font-size: var(--text-lg);
}

.project-meta {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.5rem;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.project-meta-item {
  padding: 2px 8px;
  border: 1px solid var(--border);
  border-radius: 6px;
}

.project-status {
  display: inline-flex;
  align-items: center;
  gap: 6px;
}

.status-indicator {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--warning);
}

.status-indicator.completed {
  background: var(--success);
}

/* === Progress === */
.progress-label {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-sm);
  color: var(--text-muted);
  margin-bottom: 4px;
}

.progress-bar {
  height: 6px;
  border-radius: 3px;
  background: var(--border);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: var(--accent);
  border-radius: 3px;
  transition: width var(--transition-progress);
}

.project-scope {
  display: flex;
  flex-wrap: wrap;
  gap: 6px;
}

.scope-badge {
  padding: 2px 8px;
  border-radius: 999px;
  background: var(--accent-glow);
  color: var(--text);
  font-size: var(--text-sm);
}

.project-summary {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.project-links {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: auto;
}

.project-link:hover {
  text-decoration: underline;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  padding: 0.6rem 1.2rem;
  border-radius: 8px;
  border: 1px solid transparent;
  font: inherit;
  cursor: pointer;
  transition: opacity var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  color: #ffffff;
}

.btn-primary:hover {
  box-shadow: 0 4px 16px var(--accent-glow);
}

.btn-report-bug {
  background: transparent;
  border-color: var(--border);
  color: var(--text);
}

.btn-donate {
  background: var(--donate);
  color: #1b1e26;
  font-weight: 700;
}

.btn-donate-large {
  font-size: var(--text-lg);
  padding: 0.9rem 2rem;
}

/* === Skeletons === */
@keyframes shimmer {
  0% { background-position: -400px 0; }
  100% { background-position: 400px 0; }
}

.skeleton-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.skeleton-image,
.skeleton-title,
.skeleton-meta,
.skeleton-progress,
.skeleton-badge {
  background: linear-gradient(90deg, var(--skeleton-base) 25%, var(--skeleton-shine) 50%, var(--skeleton-base) 75%);
  background-size: 800px 100%;
  animation: shimmer 1.4s infinite linear;
  border-radius: 6px;
}

.skeleton-image { aspect-ratio: 16 / 9; }
.skeleton-title { height: 22px; width: 70%; }
.skeleton-meta { height: 14px; width: 50%; }
.skeleton-progress { height: 6px; }
.skeleton-badge { display: inline-block; height: 20px; width: 60px; margin-right: 6px; }

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  display: none;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.7);
  z-index: 200;
  padding: 2rem;
}

.modal.active {
  display: flex;
}

.modal-content {
  position: relative;
  width: min(720px, 100%);
  max-height: 90vh;
  overflow-y: auto;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 2rem;
}

.modal-close {
  position: absolute;
  top: 12px;
  right: 12px;
  border: none;
}

.modal-title {
  font-size: var(--text-xl);
  margin-bottom: 1rem;
}

.modal-image {
  width: 100%;
  border-radius: 8px;
  margin-bottom: 1rem;
}

.modal-meta {
  display: grid;
  gap: 4px;
  color: var(--text-muted);
  margin-bottom: 1.5rem;
}

.modal-section-title {
  font-size: var(--text-lg);
  margin-bottom: 0.5rem;
}

.modal-instructions p {
  margin-bottom: 0.4rem;
}

.modal-download,
.modal-report-bug {
  margin-top: 1.5rem;
}

/* === Donate & Footer === */
.donate-section {
  margin: 4rem 0;
  padding: 3rem 2rem;
  text-align: center;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.donate-text {
  color: var(--text-muted);
  margin-bottom: 1.5rem;
}

.site-footer {
  border-top: 1px solid var(--border);
  padding: 2rem;
  text-align: center;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Responsive === */
@media (max-width: 720px) {
  .nav-header {
    padding: 0 1rem;
    gap: 1rem;
  }

  .nav-links {
    gap: 0.75rem;
  }

  .projects-grid {
    grid-template-columns: 1fr;
  }

  .modal-content {
    padding: 1.25rem;
  }
}

@media (prefers-reduced-motion: reduce) {
  .progress-fill,
  .project-card {
    transition: none;
  }
}
"#;
