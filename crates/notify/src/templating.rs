//! Minijinja rendering of the digest subject and HTML body.
//!
//! Row caps are applied while building the context, so templates only
//! iterate — a custom template cannot accidentally blow up the email
//! with an uncapped result set.
//!
//! Templates are arbitrary strings (not pre-registered), so a fresh
//! [`minijinja::Environment`] is created per render call.

use jobdigest_core::config::DigestConfig;
use jobdigest_core::Digest;

use crate::traits::NotifyError;

/// Default subject template.
pub const DEFAULT_SUBJECT_TEMPLATE: &str = "Daily {{ name }} Digest ({{ date }})";

/// Default HTML body: an entry-level section and an "other recent roles"
/// section, each with a no-results fallback paragraph.
pub const DEFAULT_BODY_TEMPLATE: &str = r#"<h2>Daily digest for {{ name }} ({{ date }})</h2>
{% if entry %}<h3>Entry-level roles</h3>
<ul>
{% for job in entry %}<li><b>{{ job.title | escape }}</b> - {{ job.company | escape }}<br>
<a href="{{ job.link | escape }}">Apply here</a></li>
{% endfor %}</ul>
{% if entry_total > entry | length %}<p>({{ entry_total }} entry-level roles in total, see attached CSV.)</p>
{% endif %}{% else %}<p>No entry-level roles found today.</p>
{% endif %}{% if others %}<h3>Other recent roles</h3>
<ul>
{% for job in others %}<li><b>{{ job.title | escape }}</b> - {{ job.company | escape }}<br>
<a href="{{ job.link | escape }}">Apply here</a></li>
{% endfor %}</ul>
{% else %}<p>No other roles found.</p>
{% endif %}"#;

/// One posting row exposed to templates.
#[derive(Debug, Clone, serde::Serialize)]
pub struct JobRow {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
    pub boost_score: u32,
    pub posted_days_ago: Option<u32>,
}

/// Context data available to digest templates.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DigestTemplateContext {
    /// Digest display name from configuration.
    pub name: String,
    /// Generation date, `YYYY-MM-DD`.
    pub date: String,
    /// Entry-level rows, capped at `max_entry_rows`.
    pub entry: Vec<JobRow>,
    /// Non-entry rows, capped at `max_other_rows`.
    pub others: Vec<JobRow>,
    /// Uncapped totals, for "N roles in total" lines.
    pub entry_total: usize,
    pub others_total: usize,
}

impl DigestTemplateContext {
    /// Build the template context from a digest, applying the row caps.
    pub fn from_digest(digest: &Digest, config: &DigestConfig) -> Self {
        let row = |c: &jobdigest_core::ClassifiedPosting| JobRow {
            title: c.posting.title.clone(),
            company: c.posting.company.clone(),
            location: c.posting.location.clone(),
            link: c.posting.link.clone(),
            boost_score: c.boost_score,
            posted_days_ago: c.posting.posted_days_ago,
        };

        Self {
            name: config.name.clone(),
            date: digest.generated_at.format("%Y-%m-%d").to_string(),
            entry: digest.entry.iter().take(config.max_entry_rows).map(row).collect(),
            others: digest.others.iter().take(config.max_other_rows).map(row).collect(),
            entry_total: digest.entry.len(),
            others_total: digest.others.len(),
        }
    }
}

/// Renders digest templates using minijinja.
#[derive(Debug, Default)]
pub struct TemplateRenderer {
    _private: (),
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Render a template string with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Template`] if the template is invalid or
    /// rendering fails.
    pub fn render(
        &self,
        template_str: &str,
        ctx: &DigestTemplateContext,
    ) -> Result<String, NotifyError> {
        let env = minijinja::Environment::new();
        env.render_str(template_str, ctx)
            .map_err(|e| NotifyError::Template(e.to_string()))
    }

    /// Render the default subject line.
    pub fn subject(&self, ctx: &DigestTemplateContext) -> Result<String, NotifyError> {
        self.render(DEFAULT_SUBJECT_TEMPLATE, ctx)
    }

    /// Render the default HTML body.
    pub fn body(&self, ctx: &DigestTemplateContext) -> Result<String, NotifyError> {
        self.render(DEFAULT_BODY_TEMPLATE, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jobdigest_core::{ClassifiedPosting, Digest, Posting};

    fn classified(title: &str, entry: bool, boost: u32) -> ClassifiedPosting {
        ClassifiedPosting {
            posting: Posting {
                id: title.to_string(),
                title: title.to_string(),
                company: "Acme GmbH".to_string(),
                location: "Berlin".to_string(),
                description: String::new(),
                link: format!("https://example.com/{}", title.to_lowercase()),
                posted_days_ago: Some(1),
            },
            is_entry_level: entry,
            boost_score: boost,
        }
    }

    fn digest(entry: Vec<ClassifiedPosting>, others: Vec<ClassifiedPosting>) -> Digest {
        Digest {
            generated_at: chrono::Utc.with_ymd_and_hms(2026, 8, 6, 11, 0, 0).unwrap(),
            entry,
            others,
        }
    }

    fn config() -> DigestConfig {
        DigestConfig {
            seen_file: "data/seen_jobs.txt".into(),
            keyword_rules: "data/rules/keywords.yml".into(),
            name: "Berlin Supply Chain".to_string(),
            send_empty: true,
            max_entry_rows: 15,
            max_other_rows: 20,
        }
    }

    #[test]
    fn subject_carries_name_and_date() {
        let ctx = DigestTemplateContext::from_digest(&digest(vec![], vec![]), &config());
        let subject = TemplateRenderer::new().subject(&ctx).unwrap();
        assert_eq!(subject, "Daily Berlin Supply Chain Digest (2026-08-06)");
    }

    #[test]
    fn body_lists_entry_roles_with_links() {
        let d = digest(vec![classified("Junior Buyer", true, 2)], vec![]);
        let ctx = DigestTemplateContext::from_digest(&d, &config());
        let body = TemplateRenderer::new().body(&ctx).unwrap();

        assert!(body.contains("<b>Junior Buyer</b> - Acme GmbH"));
        assert!(body.contains(r#"<a href="https://example.com/junior buyer">"#));
        assert!(body.contains("No other roles found."));
    }

    #[test]
    fn empty_digest_renders_both_fallbacks() {
        let ctx = DigestTemplateContext::from_digest(&digest(vec![], vec![]), &config());
        let body = TemplateRenderer::new().body(&ctx).unwrap();
        assert!(body.contains("No entry-level roles found today."));
        assert!(body.contains("No other roles found."));
    }

    #[test]
    fn row_caps_applied_in_context() {
        let entry: Vec<_> = (0..30).map(|i| classified(&format!("E{i}"), true, 0)).collect();
        let others: Vec<_> = (0..30).map(|i| classified(&format!("O{i}"), false, 0)).collect();
        let ctx = DigestTemplateContext::from_digest(&digest(entry, others), &config());

        assert_eq!(ctx.entry.len(), 15);
        assert_eq!(ctx.others.len(), 20);
        assert_eq!(ctx.entry_total, 30);
        assert_eq!(ctx.others_total, 30);
    }

    #[test]
    fn overflow_note_rendered_when_capped() {
        let entry: Vec<_> = (0..30).map(|i| classified(&format!("E{i}"), true, 0)).collect();
        let ctx = DigestTemplateContext::from_digest(&digest(entry, vec![]), &config());
        let body = TemplateRenderer::new().body(&ctx).unwrap();
        assert!(body.contains("(30 entry-level roles in total, see attached CSV.)"));
    }

    #[test]
    fn html_in_title_is_escaped() {
        let d = digest(vec![classified("<script>x</script>", true, 0)], vec![]);
        let ctx = DigestTemplateContext::from_digest(&d, &config());
        let body = TemplateRenderer::new().body(&ctx).unwrap();
        assert!(!body.contains("<script>x</script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[test]
    fn invalid_template_produces_error() {
        let ctx = DigestTemplateContext::from_digest(&digest(vec![], vec![]), &config());
        let result = TemplateRenderer::new().render("{{ unclosed", &ctx);
        match result.unwrap_err() {
            NotifyError::Template(msg) => assert!(!msg.is_empty()),
            other => panic!("Expected Template error, got: {:?}", other),
        }
    }
}
