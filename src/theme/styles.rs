//! Global CSS styles for the video portfolio.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Dark palette (default) */
  --bg-primary: #0f0f12;
  --bg-secondary: #1a1a20;
  --border-light: #2a2a33;
  --text-primary: #f5f5f7;
  --text-dark: #f5f5f7;
  --text-tertiary: rgba(245, 245, 247, 0.6);

  /* Accent */
  --accent: #2f80ed;
  --danger: #e5484d;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;

  /* Transitions (the modal clear waits for --transition-normal) */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

[data-theme="light"] {
  --bg-primary: #fafafa;
  --bg-secondary: #ffffff;
  --border-light: #e2e2e8;
  --text-primary: #16161a;
  --text-dark: #16161a;
  --text-tertiary: rgba(22, 22, 26, 0.6);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  background: var(--bg-primary);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: inherit;
}

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 1rem 2rem;
  background: var(--bg-secondary);
  border-bottom: 1px solid var(--border-light);
}

.nav-brand {
  font-weight: 700;
  text-decoration: none;
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  color: var(--text-tertiary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--text-primary);
  border-bottom: 2px solid var(--accent);
}

.icon-btn {
  background: transparent;
  border: 1px solid var(--border-light);
  border-radius: 50%;
  width: 2.5rem;
  height: 2.5rem;
  color: var(--text-primary);
  cursor: pointer;
  font-size: 1.1rem;
}

/* === Sections === */
main {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 2rem;
}

section {
  padding: 4rem 0;
}

.hero {
  text-align: center;
  padding: 6rem 0;
}

.page-title {
  font-size: 3rem;
  margin-bottom: 1rem;
}

.tagline {
  color: var(--text-tertiary);
  margin-bottom: 2rem;
}

.section-header {
  font-size: 2rem;
  margin-bottom: 2rem;
}

.body-text {
  color: var(--text-tertiary);
  max-width: 720px;
}

/* === Buttons === */
.btn-primary,
.btn-ghost,
.btn-danger {
  display: inline-block;
  padding: 0.6rem 1.4rem;
  border-radius: 6px;
  border: 1px solid var(--accent);
  background: var(--accent);
  color: #ffffff;
  cursor: pointer;
  text-decoration: none;
  font-size: 0.95rem;
}

.btn-ghost {
  background: transparent;
  color: var(--text-primary);
}

.btn-danger {
  background: transparent;
  border-color: var(--danger);
  color: var(--danger);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Video Grid === */
.video-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 2rem;
}

.video-card {
  background: var(--bg-secondary);
  border: 1px solid var(--border-light);
  border-radius: 12px;
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.video-card:hover {
  transform: translateY(-4px);
}

.video-embed {
  position: relative;
  aspect-ratio: 16 / 9;
  background: #000000;
}

.video-iframe {
  width: 100%;
  height: 100%;
  border: none;
}

.video-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.25);
  opacity: 0;
  transition: opacity var(--transition-fast);
}

.video-card:hover .video-overlay {
  opacity: 1;
}

.video-info {
  padding: 1rem 1.25rem 1.5rem;
}

.video-title {
  font-size: 1.15rem;
  margin-bottom: 0.5rem;
}

.video-description {
  color: var(--text-tertiary);
  font-size: 0.9rem;
}

.more-link {
  grid-column: 1 / -1;
  text-align: center;
  margin-top: 2rem;
  color: var(--text-primary);
  text-decoration: underline;
}

/* === Grid Messages === */
.grid-message {
  grid-column: 1 / -1;
  text-align: center;
  padding: 3rem;
  color: var(--text-tertiary);
  max-width: 800px;
  margin: 0 auto;
}

.grid-message h3 {
  color: var(--text-dark);
  margin-bottom: 1rem;
}

.error-body {
  text-align: left;
  background: var(--bg-secondary);
  padding: 1.5rem;
  border-radius: 8px;
  border: 2px solid var(--border-light);
}

.error-remedies {
  margin: 0.75rem 0 0 1.5rem;
}

.loading {
  grid-column: 1 / -1;
  display: flex;
  justify-content: center;
  padding: 3rem;
}

.spinner {
  width: 40px;
  height: 40px;
  border: 3px solid var(--border-light);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Modal === */
.video-modal {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--transition-normal), visibility var(--transition-normal);
}

.video-modal.active {
  opacity: 1;
  visibility: visible;
}

.modal-overlay {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.85);
}

.modal-content {
  position: relative;
  width: min(960px, 92vw);
  max-height: 92vh;
  overflow-y: auto;
  background: var(--bg-secondary);
  border-radius: 12px;
}

.modal-close {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  z-index: 2;
}

.modal-video-container {
  aspect-ratio: 16 / 9;
  background: #000000;
}

.modal-video {
  width: 100%;
  height: 100%;
  border: none;
}

.modal-info {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.5rem;
}

.modal-title-field,
.modal-description-field {
  background: transparent;
  border: none;
  color: var(--text-primary);
  font-family: inherit;
  resize: none;
}

.modal-title-field {
  font-size: 1.4rem;
  font-weight: 700;
}

.modal-description-field {
  min-height: 8rem;
  color: var(--text-tertiary);
}

.modal-actions {
  padding: 0 1.5rem 1.5rem;
}

/* === Session Editor === */
.session-editor {
  margin-top: 2rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  max-width: 480px;
}

.session-editor input,
.session-editor textarea {
  display: block;
  width: 100%;
  margin-top: 0.5rem;
  padding: 0.5rem 0.75rem;
  background: var(--bg-secondary);
  border: 1px solid var(--border-light);
  border-radius: 6px;
  color: var(--text-primary);
  font-family: inherit;
}

.session-actions {
  display: flex;
  gap: 0.75rem;
}

.session-editor input.invalid {
  border-color: var(--danger);
}

.session-hint,
.error-text {
  font-size: 0.85rem;
  color: var(--text-tertiary);
}

.error-text {
  color: var(--danger);
}

/* === Footer === */
.site-footer {
  text-align: center;
  padding: 2rem;
  color: var(--text-tertiary);
  border-top: 1px solid var(--border-light);
}

@media (max-width: 640px) {
  .nav-header {
    flex-wrap: wrap;
    padding: 1rem;
  }

  .video-grid {
    grid-template-columns: 1fr;
  }
}
"#;
