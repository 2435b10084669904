//! Global CSS styles for Finexus.
//!
//! Light slate background, frosted white cards, blue accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --bg: #f8fafc;
  --glass: rgba(255, 255, 255, 0.6);
  --glass-strong: rgba(255, 255, 255, 0.75);
  --glass-border: rgba(255, 255, 255, 0.35);
  --hairline: #e2e8f0;

  /* TEXT */
  --text-strong: #0f172a;
  --text: #334155;
  --text-muted: #64748b;

  /* ACCENT */
  --blue: #2563eb;
  --blue-dark: #1d4ed8;
  --indigo: #4f46e5;
  --blue-tint: rgba(37, 99, 235, 0.1);

  /* SEMANTIC */
  --danger: #dc2626;
  --danger-tint: #fef2f2;
  --ok: #16a34a;
  --warning: #d97706;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Shape */
  --radius: 1rem;
  --radius-sm: 0.75rem;
  --shadow: 0 10px 25px -10px rgba(15, 23, 42, 0.25);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--bg);
  color: var(--text-strong);
  font-family: var(--font-sans);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

code, pre {
  font-family: var(--font-mono);
  font-size: 0.85rem;
}

.muted {
  color: var(--text-muted);
  font-size: 0.875rem;
}

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-inverse, .btn-outline-inverse {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  height: 2.5rem;
  padding: 0 1rem;
  border-radius: var(--radius-sm);
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-primary {
  background: var(--blue);
  color: white;
  border: none;
}

.btn-primary:hover { background: var(--blue-dark); }

.btn-primary:disabled {
  opacity: 0.55;
  cursor: progress;
}

.btn-secondary {
  background: var(--glass-strong);
  color: var(--text-strong);
  border: 1px solid var(--hairline);
}

.btn-secondary:hover { background: white; }

.btn-inverse {
  background: white;
  color: var(--blue-dark);
  border: none;
}

.btn-outline-inverse {
  background: transparent;
  color: white;
  border: 1px solid rgba(255, 255, 255, 0.4);
}

/* === Pills & Cards === */
.pill {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  background: var(--glass);
  border: 1px solid var(--glass-border);
  backdrop-filter: blur(16px);
  font-size: 0.75rem;
  color: var(--text);
}

.stat-card {
  background: var(--glass);
  backdrop-filter: blur(16px);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius);
  padding: 1.25rem;
  box-shadow: var(--shadow);
  transition: box-shadow var(--transition-normal);
}

.stat-card:hover { box-shadow: 0 20px 35px -15px rgba(15, 23, 42, 0.35); }

.stat-title {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.stat-value {
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--text-strong);
}

.stat-subtitle {
  margin-top: 0.25rem;
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* === Landing === */
.landing {
  min-height: 100vh;
  background: linear-gradient(to bottom, var(--bg), var(--bg), white);
}

.navbar {
  position: sticky;
  top: 1rem;
  z-index: 30;
  max-width: 80rem;
  margin: 1rem auto 0;
  padding: 0.75rem 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  border-radius: var(--radius);
  background: rgba(255, 255, 255, 0.7);
  border: 1px solid rgba(255, 255, 255, 0.4);
  backdrop-filter: blur(16px);
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.brand-mark {
  width: 2rem;
  height: 2rem;
  border-radius: var(--radius-sm);
  background: var(--blue);
}

.brand-name { font-weight: 600; }

.nav-links {
  display: flex;
  gap: 1.5rem;
  font-size: 0.875rem;
  color: var(--text);
}

.nav-links a:hover { color: var(--text-strong); }

.nav-actions {
  display: flex;
  gap: 0.5rem;
}

.hero {
  max-width: 48rem;
  margin: 0 auto;
  padding: 6rem 1.5rem 4rem;
  text-align: center;
  background: radial-gradient(ellipse at top, var(--blue-tint), transparent 70%);
}

.hero-compact { padding: 4rem 1.5rem 2.5rem; }

.hero-title {
  margin-top: 0.75rem;
  font-size: 3rem;
  font-weight: 600;
  letter-spacing: -0.02em;
}

.hero-text {
  margin-top: 1rem;
  color: var(--text);
}

.hero-actions {
  margin-top: 1.5rem;
  display: flex;
  justify-content: center;
  gap: 0.75rem;
}

.stats-strip {
  max-width: 80rem;
  margin: 0 auto;
  padding: 2.5rem 1.5rem;
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 0.75rem;
}

.features, .faq {
  max-width: 80rem;
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.faq { max-width: 56rem; }

.eyebrow {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--blue-dark);
}

.eyebrow.inverse { color: rgba(255, 255, 255, 0.8); }

.section-heading {
  margin: 0.25rem 0 0.5rem;
  font-size: 1.75rem;
  font-weight: 600;
}

.feature-grid {
  margin-top: 1.5rem;
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
}

.feature {
  padding: 1.5rem;
  border-radius: var(--radius);
  background: var(--glass);
  border: 1px solid var(--glass-border);
  backdrop-filter: blur(16px);
}

.feature-icon {
  width: 2.75rem;
  height: 2.75rem;
  margin-bottom: 0.75rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-sm);
  background: var(--blue-tint);
}

.feature-title { font-weight: 600; }

.feature-text {
  margin-top: 0.25rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.how {
  max-width: 80rem;
  margin: 2rem auto;
  padding: 3rem;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.5rem;
  align-items: center;
  border-radius: 1.5rem;
  color: white;
  background: linear-gradient(135deg, var(--blue), var(--indigo));
}

.how ul {
  margin-top: 1rem;
  list-style: none;
  font-size: 0.875rem;
  color: rgba(255, 255, 255, 0.9);
}

.how li::before { content: "\2022  "; }

.how .hero-actions { justify-content: flex-start; }

.how-figures {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.75rem;
  padding: 1.5rem;
  border-radius: var(--radius);
  background: rgba(255, 255, 255, 0.1);
}

.figure {
  padding: 1rem;
  border-radius: var(--radius-sm);
  background: rgba(255, 255, 255, 0.2);
}

.figure-label { color: rgba(255, 255, 255, 0.8); font-size: 0.875rem; }
.figure-value { font-size: 1.5rem; font-weight: 600; }

.faq-item {
  padding: 1rem 0;
  border-bottom: 1px solid var(--hairline);
}

.faq-question { font-weight: 500; }

.faq-answer {
  margin-top: 0.25rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.footer {
  max-width: 80rem;
  margin: 0 auto;
  padding: 1.5rem;
  display: flex;
  justify-content: space-between;
  border-top: 1px solid var(--hairline);
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Dashboard === */
.dashboard {
  min-height: 100vh;
  background: var(--bg);
}

.content {
  max-width: 72rem;
  margin: 0 auto;
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.summary-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 0.75rem;
}

.tab-list {
  display: flex;
  gap: 0.5rem;
  border-bottom: 1px solid var(--hairline);
}

.tab-trigger {
  padding: 0.5rem 1rem;
  border: 1px solid transparent;
  border-radius: var(--radius-sm) var(--radius-sm) 0 0;
  background: transparent;
  color: var(--text);
  font-size: 0.9rem;
  cursor: pointer;
}

.tab-trigger.active {
  background: white;
  border-color: var(--hairline);
  border-bottom-color: white;
  box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
  margin-bottom: -1px;
}

.resource-section {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.section-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.section-title {
  font-size: 1.125rem;
  font-weight: 600;
}

.section-description {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.error-banner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.5rem 0.75rem;
  border-radius: var(--radius-sm);
  border: 1px solid rgba(220, 38, 38, 0.25);
  background: var(--danger-tint);
  color: var(--danger);
  font-size: 0.85rem;
}

.error-dismiss {
  border: none;
  background: transparent;
  color: inherit;
  font-size: 1.1rem;
  cursor: pointer;
}

.add-form {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 0.75rem;
  align-items: end;
}

.form-field {
  display: flex;
  flex-direction: column;
}

.input-label {
  margin-bottom: 0.25rem;
  font-size: 0.75rem;
  color: var(--text-muted);
}

.input-field {
  height: 2.5rem;
  padding: 0 0.75rem;
  border-radius: var(--radius-sm);
  border: 1px solid var(--hairline);
  background: rgba(255, 255, 255, 0.7);
  font-family: inherit;
  font-size: 0.9rem;
  color: var(--text-strong);
  transition: box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--blue);
}

.input-field.invalid {
  border-color: var(--danger);
  box-shadow: 0 0 0 1px var(--danger);
}

.form-error {
  font-size: 0.8rem;
  color: var(--danger);
}

.section-loading, .section-empty {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.75rem;
}

.record-card {
  padding: 1rem;
  border-radius: var(--radius);
  background: var(--glass);
  border: 1px solid var(--glass-border);
  backdrop-filter: blur(16px);
}

.record-headline {
  font-weight: 500;
  color: var(--text-strong);
}

.record-row {
  font-size: 0.875rem;
  color: var(--text);
  overflow-wrap: anywhere;
}

.record-label { color: var(--text-muted); }

/* === Diagnostics === */
.diagnostics {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
}

.diagnostics-card {
  width: 100%;
  max-width: 40rem;
  padding: 2rem;
  border-radius: var(--radius);
  background: var(--glass-strong);
  border: 1px solid var(--hairline);
  box-shadow: var(--shadow);
}

.page-title {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.probe {
  margin-top: 1.25rem;
  font-weight: 500;
}

.probe-pending { color: var(--text-muted); }
.probe-ok { color: var(--ok); }
.probe-warn { color: var(--warning); }
.probe-error { color: var(--danger); }

.probe-body {
  margin-top: 0.75rem;
  padding: 0.75rem;
  border-radius: var(--radius-sm);
  background: var(--bg);
  border: 1px solid var(--hairline);
  overflow-x: auto;
}

.diagnostics-actions {
  margin-top: 1.5rem;
  display: flex;
  gap: 0.5rem;
}

/* === Narrow windows === */
@media (max-width: 900px) {
  .summary-grid, .stats-strip, .add-form { grid-template-columns: repeat(2, 1fr); }
  .feature-grid, .card-grid { grid-template-columns: 1fr 1fr; }
  .how { grid-template-columns: 1fr; }
  .nav-links { display: none; }
  .hero-title { font-size: 2.25rem; }
}
"#;
