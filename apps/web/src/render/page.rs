use crate::errors::AppError;
use crate::locale;
use crate::lookup::profile::ProfileField;
use crate::lookup::{CandidateProfile, ProfileLookup, RecommendationList, RecommendationLookup};
use crate::render::html::{escape, is_linkable, link, notice, NoticeKind};

/// Outcome of one form submission, ready to render.
#[derive(Debug)]
pub struct SearchResults {
    pub candidate_id: u64,
    pub profile: ProfileLookup,
    pub recommendations: Result<RecommendationLookup, AppError>,
}

#[derive(Debug)]
pub enum PageBody {
    /// Form only; nothing submitted yet.
    Empty,
    Results(SearchResults),
    /// The submission failed before any lookup ran.
    Failed(AppError),
}

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #262730; }
.layout { display: flex; min-height: 100vh; }
aside { width: 18rem; padding: 1.5rem; background: #f0f2f6; box-sizing: border-box; }
main { flex: 1; padding: 1.5rem 3rem; min-width: 0; }
form label { display: block; margin-bottom: .4rem; }
form input { width: 100%; padding: .4rem; margin-bottom: .8rem; box-sizing: border-box; }
.profile { display: grid; grid-template-columns: 1fr 1fr; gap: 0 2rem; }
.profile h3 { margin-bottom: .2rem; }
.notice { padding: .75rem 1rem; border-radius: .4rem; margin: .5rem 0; }
.notice-info { background: #e8f0fe; }
.notice-warning { background: #fffae6; }
.notice-error { background: #fdecea; }
table.jobs { width: 100%; border-collapse: collapse; }
table.jobs th, table.jobs td { text-align: left; padding: .4rem .6rem; border-bottom: 1px solid #e6e9ef; }
"#;

/// Full HTML document: search form in the sidebar, results in the main column.
pub fn render_page(input: Option<u64>, body: &PageBody) -> String {
    let content = match body {
        PageBody::Empty => String::new(),
        PageBody::Results(results) => render_results(results),
        PageBody::Failed(err) => render_error(err),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="vi">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<div class="layout">
<aside>{form}</aside>
<main>
<h1>{heading}</h1>
{content}
</main>
</div>
</body>
</html>
"#,
        title = escape(locale::PAGE_TITLE),
        form = render_form(input),
        heading = escape(locale::PAGE_HEADING),
    )
}

fn render_form(input: Option<u64>) -> String {
    format!(
        r#"<h2>{header}</h2>
<form id="candidate_search_form" method="get" action="/">
<label for="candidate_id">{label}</label>
<input id="candidate_id" name="candidate_id" type="number" min="0" step="1" value="{value}" required>
<button type="submit">{submit}</button>
</form>"#,
        header = escape(locale::SEARCH_HEADER),
        label = escape(locale::SEARCH_INPUT_LABEL),
        value = input.unwrap_or(0),
        submit = escape(locale::SEARCH_SUBMIT),
    )
}

fn render_results(results: &SearchResults) -> String {
    let mut out = render_profile(&results.profile);
    out.push_str("\n<hr>\n");
    out.push_str(&format!(
        "<h2>{}</h2>\n",
        escape(locale::RECOMMENDATIONS_HEADER)
    ));
    match &results.recommendations {
        Ok(RecommendationLookup::Found(list)) => out.push_str(&render_recommendations(list)),
        Ok(RecommendationLookup::NoRecommendations) => out.push_str(&notice(
            NoticeKind::Warning,
            &locale::no_recommendations(results.candidate_id),
        )),
        Err(err) => out.push_str(&render_error(err)),
    }
    out
}

fn render_profile(lookup: &ProfileLookup) -> String {
    let mut out = format!("<h2>{}</h2>\n", escape(locale::PROFILE_HEADER));
    match lookup {
        ProfileLookup::NotFound => {
            out.push_str(&notice(NoticeKind::Warning, locale::PROFILE_NOT_FOUND));
        }
        ProfileLookup::Found(profile) => out.push_str(&render_profile_fields(profile)),
    }
    out
}

fn render_profile_fields(profile: &CandidateProfile) -> String {
    let (left, right) = profile.fields.split_at(profile.fields.len().min(2));
    let column = |fields: &[ProfileField]| {
        fields
            .iter()
            .map(|field| {
                format!(
                    "<h3>{}</h3><p>{}</p>",
                    escape(field.label),
                    escape(field.value.as_deref().unwrap_or(locale::MISSING_VALUE))
                )
            })
            .collect::<String>()
    };
    format!(
        r#"<div class="profile" data-candidate-id="{}"><div>{}</div><div>{}</div></div>"#,
        profile.candidate_id,
        column(left),
        column(right)
    )
}

fn render_recommendations(list: &RecommendationList) -> String {
    let mut out = format!(
        "<p>{}</p>\n",
        escape(&locale::recommendations_found(list.jobs.len()))
    );

    out.push_str(r#"<table class="jobs"><thead><tr>"#);
    for column in &list.columns {
        let header = if column.is_link {
            locale::LINK_HEADER
        } else {
            column.label
        };
        out.push_str(&format!("<th>{}</th>", escape(header)));
    }
    out.push_str("</tr></thead><tbody>");

    for job in &list.jobs {
        out.push_str("<tr>");
        for (column, value) in list.columns.iter().zip(&job.values) {
            let cell = match value.as_deref() {
                Some(url) if column.is_link && is_linkable(url) => link(url, locale::LINK_TEXT),
                Some(text) => escape(text),
                None => String::new(),
            };
            out.push_str(&format!("<td>{cell}</td>"));
        }
        out.push_str("</tr>");
    }

    out.push_str("</tbody></table>\n");
    out
}

/// Localized notices for a failed submission. Operator-facing detail goes to the log, not here.
fn render_error(err: &AppError) -> String {
    match err {
        AppError::MissingInput { path, expected } => {
            let files = expected
                .iter()
                .map(|p| format!("- {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n");
            [
                notice(NoticeKind::Error, locale::MISSING_FILE),
                notice(
                    NoticeKind::Error,
                    &locale::detail(&path.display().to_string()),
                ),
                notice(NoticeKind::Info, locale::REQUIRED_FILES),
                format!(
                    r#"<pre class="notice notice-info">{}</pre>"#,
                    escape(&files)
                ),
            ]
            .join("\n")
        }
        AppError::Validation(message) => notice(NoticeKind::Warning, message),
        AppError::NotFound(_) | AppError::InvalidReference { .. } | AppError::Unexpected(_) => [
            notice(NoticeKind::Error, locale::UNEXPECTED_ERROR),
            notice(NoticeKind::Error, &locale::error_detail(&err.to_string())),
        ]
        .join("\n"),
    }
}
