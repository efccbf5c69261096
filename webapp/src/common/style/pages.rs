pub const PAGE_STYLES: &str = r#"
.page {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-8) var(--space-4);
}

.hero-title {
  font-size: 2.5rem;
  font-weight: 700;
  margin-bottom: var(--space-3);
}

.hero-subtitle {
  color: var(--text-secondary);
  font-size: 1.15rem;
  margin-bottom: var(--space-6);
}

.btn {
  display: inline-flex;
  align-items: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  background-color: var(--primary);
  color: var(--surface-raised);
}

.btn:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

.empty-state {
  color: var(--text-tertiary);
  padding: var(--space-6);
  border: 1px dashed var(--border);
  border-radius: var(--radius-lg);
}
"#;
