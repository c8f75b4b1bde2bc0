//! HTML fragment rendering.
//!
//! Produces the same markup the desktop UI builds from the view models, for
//! static builds and for inspecting what a page would show. Every text and
//! URL value goes through [`escape_html`].

use crate::escape::escape_html;
use crate::view::{
    CardView, Instructions, ModalView, SoonCardView, EMPTY_STATE, INSTRUCTIONS_PENDING,
    LOAD_FAILED,
};

const DOWNLOAD_ICON: &str = r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"></path><polyline points="7 10 12 15 17 10"></polyline><line x1="12" y1="15" x2="12" y2="3"></line></svg>"#;

const BUG_ICON: &str = r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"></path><line x1="9" y1="10" x2="15" y2="10"></line><line x1="12" y1="7" x2="12" y2="13"></line></svg>"#;

/// Render one project card
pub fn card_html(card: &CardView) -> String {
    let title = escape_html(&card.title);

    let new_badge = if card.is_new {
        r#"<span class="project-new-badge">NEW</span>"#
    } else {
        ""
    };

    let image = card
        .image
        .as_deref()
        .map(|src| {
            format!(
                r#"<div class="project-image-container"><img src="{src}" alt="{title}" class="project-image" loading="lazy"></div>"#,
                src = escape_html(src),
            )
        })
        .unwrap_or_default();

    let meta: String = card
        .meta
        .iter()
        .map(|item| format!(r#"<span class="project-meta-item">{}</span>"#, escape_html(item)))
        .collect();

    let scope = if card.scope.is_empty() {
        String::new()
    } else {
        let badges: String = card
            .scope
            .iter()
            .map(|tag| format!(r#"<span class="scope-badge">{}</span>"#, escape_html(tag)))
            .collect();
        format!(r#"<div class="project-scope">{badges}</div>"#)
    };

    let summary = card
        .summary
        .as_deref()
        .map(|s| format!(r#"<p class="project-summary">{}</p>"#, escape_html(s)))
        .unwrap_or_default();

    let download = if card.has_download {
        format!(
            r#"<div class="project-card-download"><button class="btn btn-primary btn-card-download" data-project-index="{index}"><span>Скачати</span>{DOWNLOAD_ICON}</button></div>"#,
            index = card.index,
        )
    } else {
        String::new()
    };

    let links = if card.links.is_empty() {
        String::new()
    } else {
        let anchors: String = card
            .links
            .iter()
            .map(|link| {
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="project-link">{}</a>"#,
                    escape_html(&link.url),
                    link.kind.label()
                )
            })
            .collect();
        format!(r#"<div class="project-links">{anchors}</div>"#)
    };

    format!(
        r#"<article class="project-card{featured}" role="listitem" tabindex="0" data-project-index="{index}">
{new_badge}{image}<div class="project-content">
<div class="project-header"><h3 class="project-title">{title}</h3></div>
<div class="project-meta">{meta}<span class="project-status"><span class="status-indicator {status_class}"></span>{status_label}</span></div>
<div class="progress-container"><div class="progress-label"><span>Прогрес</span><span>{progress}%</span></div><div class="progress-bar"><div class="progress-fill" data-progress="{progress}" style="width: 0%"></div></div></div>
{scope}{summary}{download}{links}
</div>
</article>"#,
        featured = if card.featured { " featured" } else { "" },
        index = card.index,
        status_class = card.status.css_class(),
        status_label = card.status.label(),
        progress = card.progress,
    )
}

/// Render the trailing "coming soon" card
pub fn soon_card_html(soon: &SoonCardView) -> String {
    format!(
        r#"<article class="project-card project-card-soon" role="listitem">
<div class="project-content">
<div class="project-header"><h3 class="project-title">{title}</h3></div>
<p class="project-summary">{summary}</p>
<div class="project-links"><a href="{href}" class="project-link project-link-suggest">{label}</a></div>
</div>
</article>"#,
        title = SoonCardView::TITLE,
        summary = escape_html(SoonCardView::SUMMARY),
        href = escape_html(&soon.mailto()),
        label = SoonCardView::LINK_LABEL,
    )
}

/// Render `count` loading placeholders
pub fn skeletons_html(count: usize) -> String {
    const SKELETON: &str = r#"<div class="skeleton-card"><div class="skeleton-image"></div><div class="skeleton-title"></div><div class="skeleton-meta"></div><div class="skeleton-progress"></div><div><span class="skeleton-badge"></span><span class="skeleton-badge"></span></div></div>"#;
    SKELETON.repeat(count)
}

pub fn empty_state_html() -> String {
    format!(r#"<p class="empty-state">{EMPTY_STATE}</p>"#)
}

pub fn error_html() -> String {
    format!(r#"<p class="empty-state">{LOAD_FAILED}</p>"#)
}

/// Render the whole grid body.
///
/// No cards means the empty-state message alone, without the soon card.
pub fn grid_html(cards: &[CardView], soon: &SoonCardView) -> String {
    if cards.is_empty() {
        return empty_state_html();
    }
    let mut out: String = cards.iter().map(card_html).collect::<Vec<_>>().join("\n");
    out.push('\n');
    out.push_str(&soon_card_html(soon));
    out
}

/// Render the content slot of the project modal
pub fn modal_html(view: &ModalView) -> String {
    let title = escape_html(&view.title);

    let image = view
        .image
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{title}" class="modal-image">"#,
                escape_html(src)
            )
        })
        .unwrap_or_default();

    let mut meta = String::new();
    for (label, value) in [
        ("Версія локалізації", view.version.as_deref()),
        ("Дата локалізації", view.release_date.as_deref()),
        ("Платформа", view.platform.as_deref()),
    ] {
        if let Some(value) = value {
            meta.push_str(&format!(
                r#"<div class="modal-meta-item"><strong>{label}:</strong> {}</div>"#,
                escape_html(value)
            ));
        }
    }

    let instructions = match &view.instructions {
        Instructions::Steps(lines) => lines
            .iter()
            .map(|line| format!("<p>{}</p>", escape_html(line)))
            .collect::<String>(),
        Instructions::Pending => format!("<p>{INSTRUCTIONS_PENDING}</p>"),
    };

    let download = view
        .download
        .as_ref()
        .map(|d| {
            format!(
                r#"<div class="modal-download"><a href="{url}" class="btn btn-primary btn-download" download data-project-title="{t}" data-project-version="{v}"><span>Завантажити локалізацію</span>{DOWNLOAD_ICON}</a></div>"#,
                url = escape_html(&d.url),
                t = escape_html(&d.title),
                v = escape_html(&d.version),
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="modal-header"><h2 id="modalTitle" class="modal-title">{title}</h2>{image}</div>
<div class="modal-body">
<div class="modal-meta">{meta}</div>
<div class="modal-section"><h3 class="modal-section-title">Як встановити локалізацію</h3><div class="modal-instructions">{instructions}</div></div>
{download}
<div class="modal-report-bug"><a href="{bug}" class="btn btn-report-bug"><span>Повідомити про помилку</span>{BUG_ICON}</a></div>
</div>"#,
        bug = escape_html(&view.bug_report_href),
    )
}
