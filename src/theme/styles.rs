//! Global CSS styles for Reunion Planner.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SAND (Backgrounds) */
  --sand: #faf6ef;
  --sand-deep: #f1e8d9;
  --sand-border: #e2d5bf;

  /* SEA (Primary actions, slider range) */
  --sea: #1f7a8c;
  --sea-deep: #145566;
  --sea-glow: rgba(31, 122, 140, 0.25);

  /* SUNSET (Highlights, the save action) */
  --sunset: #e0733b;
  --sunset-glow: rgba(224, 115, 59, 0.3);

  /* TEXT */
  --text-primary: #2b2620;
  --text-secondary: rgba(43, 38, 32, 0.75);
  --text-muted: rgba(43, 38, 32, 0.5);

  /* SEMANTIC */
  --danger: #c4373f;
  --success: #3f8f5a;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-display: 'Playfair Display', Georgia, serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

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

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--sand);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

main {
  max-width: 860px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
}

/* === Typography === */
.page-header {
  display: flex;
  flex-wrap: wrap;
  align-items: baseline;
  gap: 1rem;
  margin-bottom: 2rem;
}

.page-title {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--sea-deep);
}

.tagline {
  color: var(--text-secondary);
  flex-basis: 100%;
}

.section-header {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 500;
  color: var(--sea-deep);
  margin-bottom: 0.75rem;
}

.nav-link {
  color: var(--sea);
  text-decoration: none;
  font-size: var(--text-sm);
}

.nav-link:hover {
  text-decoration: underline;
}

/* === Buttons === */
.btn-primary,
.btn-secondary,
.btn-tertiary {
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  padding: 0.5rem 1rem;
  border-radius: 6px;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-primary {
  background: var(--sea);
  color: #ffffff;
  border: 1px solid var(--sea);
}

.btn-primary:hover {
  background: var(--sea-deep);
}

.btn-secondary {
  background: transparent;
  color: var(--sea);
  border: 1px solid var(--sea);
}

.btn-secondary:hover {
  background: var(--sea-glow);
}

.btn-tertiary {
  background: transparent;
  color: var(--text-secondary);
  border: 1px dashed var(--sand-border);
}

.btn-enter {
  display: block;
  width: 100%;
  margin-top: 2rem;
  padding: 1rem;
  font-size: var(--text-lg);
  background: var(--sunset);
  color: #ffffff;
  border: none;
  border-radius: 8px;
  cursor: pointer;
  box-shadow: 0 4px 20px var(--sunset-glow);
}

.btn-enter:disabled {
  opacity: 0.6;
  cursor: progress;
}

/* === Inputs === */
.input-field,
select,
input[type="date"] {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--sand-border);
  border-radius: 6px;
  background: #ffffff;
  color: var(--text-primary);
}

.input-field:focus,
select:focus,
input[type="date"]:focus {
  outline: none;
  border-color: var(--sea);
  box-shadow: 0 0 0 3px var(--sea-glow);
}

/* === Traveler Count & Dates === */
.traveler-count,
.date-inputs {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.traveler-count .input-field {
  width: 6rem;
}

.date-range-panel {
  margin-bottom: 1.5rem;
}

.date-locked,
.progress {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Traveler Cards === */
.forms-container {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  margin-top: 1rem;
}

.traveler-form,
.traveler-summary {
  background: #ffffff;
  border: 1px solid var(--sand-border);
  border-radius: 10px;
  padding: 1.5rem;
}

.traveler-summary {
  background: var(--sand-deep);
}

.traveler-summary h3 {
  margin-bottom: 0.75rem;
  color: var(--sea-deep);
}

.traveler-summary ul {
  margin: 0.25rem 0 0.75rem 1.25rem;
}

.question {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  margin-bottom: 1.25rem;
}

.question > label {
  font-weight: 600;
}

/* === Budget Slider === */
.budget-slider {
  padding: 0.75rem 0.5rem 0;
}

.slider-track {
  position: relative;
  height: 6px;
  background: var(--sand-border);
  border-radius: 3px;
  margin: 0.75rem 0;
}

.slider-range {
  position: absolute;
  top: 0;
  height: 100%;
  background: var(--sea);
  border-radius: 3px;
}

.slider-thumb {
  position: absolute;
  top: 50%;
  width: 18px;
  height: 18px;
  margin-left: -9px;
  transform: translateY(-50%);
  background: #ffffff;
  border: 2px solid var(--sea);
  border-radius: 50%;
  cursor: grab;
  touch-action: none;
}

.slider-thumb:focus {
  outline: none;
  box-shadow: 0 0 0 4px var(--sea-glow);
}

.slider-thumb.active {
  cursor: grabbing;
  background: var(--sea);
}

.range-values {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.range-value {
  font-weight: 600;
  color: var(--text-primary);
}

/* Catches moves and the release anywhere in the window while dragging */
.drag-capture {
  position: fixed;
  inset: 0;
  z-index: 900;
  cursor: grabbing;
}

/* === Vibes === */
.multi-select-container {
  display: flex;
  gap: 0.5rem;
}

.selected-vibes {
  list-style: none;
}

.selected-vibes li {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.2rem 0;
}

.vibe-remove {
  background: transparent;
  border: none;
  color: var(--danger);
  font-size: var(--text-lg);
  cursor: pointer;
  line-height: 1;
}

/* === City Select === */
.city-chosen {
  font-size: var(--text-sm);
  color: var(--success);
}

.city-options {
  list-style: none;
  max-height: 12rem;
  overflow-y: auto;
  border: 1px solid var(--sand-border);
  border-radius: 6px;
  background: #ffffff;
}

.city-option {
  padding: 0.35rem 0.75rem;
  cursor: pointer;
}

.city-option:hover,
.city-option.selected {
  background: var(--sea-glow);
}

/* === Modal Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(43, 38, 32, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
}

.notice-modal {
  background: #ffffff;
  border-radius: 10px;
  max-width: 420px;
  width: 100%;
  padding: 1.5rem;
  box-shadow: 0 12px 40px rgba(0, 0, 0, 0.2);
}

.modal-description {
  margin-bottom: 1.25rem;
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
}

/* === Results === */
.results-table {
  width: 100%;
  border-collapse: collapse;
  background: #ffffff;
  font-size: var(--text-sm);
}

.results-table th,
.results-table td {
  padding: 0.5rem 0.75rem;
  border-bottom: 1px solid var(--sand-border);
  text-align: left;
}

.results-table th.sortable {
  cursor: pointer;
  user-select: none;
}

.results-table th.active {
  color: var(--sea-deep);
}

/* === States === */
.empty-state,
.loading-message {
  color: var(--text-muted);
  font-style: italic;
}

.loading-state {
  padding: 2rem 0;
  text-align: center;
}

.error-text {
  color: var(--danger);
}
"#;
