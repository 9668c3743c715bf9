//! # Portfolio Content
//!
//! The text shown on the portfolio screen, as styled lines. The frame
//! compositor only sees the [`ContentProvider`] trait, so tests can swap in
//! their own blocks.

use ratatui::text::{Line, Span};

use crate::core::i18n::{Language, t};
use crate::core::state::Tab;
use crate::tui::text::{repeat, spaces, styled};
use crate::tui::theme;

/// Source of everything the portfolio frame displays.
pub trait ContentProvider {
    /// Identity, contact and biography lines for the left panel.
    /// `panel_width` lets separators span the panel.
    fn left_panel(&self, lang: Language, panel_width: usize) -> Vec<Line<'static>>;

    /// Ordered lines for one tab of the right panel.
    fn tab_content(&self, lang: Language, tab: Tab) -> Vec<Line<'static>>;

    fn tab_label(&self, lang: Language, tab: Tab) -> String {
        tab.title(lang).to_string()
    }

    /// Text inside the small box on the top-left border.
    fn site_label(&self) -> Span<'static>;

    fn footer_hint(&self, lang: Language) -> String;
}

pub const SITE: &str = "termfolio.dev";

/// Contact values are padded so they line up in one column.
const INFO_LABEL_WIDTH: usize = 10;

const NAME_BANNER: [&str; 3] = [
    "╔╦╗╔═╗╦ ╦╔═╗╔╦╗╔═╗╔╦╗  ╔═╗╔═╗╔═╗╦ ╦╔═╗",
    "║║║║ ║╠═╣╠═╣║║║║╣  ║║  ║ ╦╠═╣║  ╠═╣╠═╣",
    "╩ ╩╚═╝╩ ╩╩ ╩╩ ╩╚═╝═╩╝  ╚═╝╩ ╩╚═╝╩ ╩╩ ╩",
];

fn title(text: impl Into<String>) -> Line<'static> {
    Line::from(styled(text, theme::title()))
}

fn body(text: impl Into<String>) -> Line<'static> {
    Line::from(styled(text, theme::content()))
}

fn muted(text: impl Into<String>) -> Line<'static> {
    Line::from(styled(text, theme::muted()))
}

/// `Mission: ...` style line: muted label, then content.
fn labeled(label: &str, text: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        styled(label, theme::muted()),
        Span::raw(" "),
        styled(text, theme::content()),
    ])
}

/// `━━━ heading ━━━`
fn heading(text: impl Into<String>) -> Line<'static> {
    title(format!("━━━ {} ━━━", text.into()))
}

fn link_heading(text: &str) -> Line<'static> {
    Line::from(vec![
        styled("━━━ ", theme::title()),
        styled(text, theme::link(theme::title())),
        styled(" ━━━", theme::title()),
    ])
}

fn tab_header(lang: Language, key: &'static str) -> Line<'static> {
    Line::from(vec![
        styled(t(lang, key), theme::title()),
        Span::raw(" "),
        styled(t(lang, "exp_scroll"), theme::muted()),
    ])
}

fn info_row(label: &str, value: &str, is_link: bool) -> Line<'static> {
    let pad = INFO_LABEL_WIDTH.saturating_sub(label.chars().count());
    let value_style = if is_link {
        theme::link(theme::content())
    } else {
        theme::content()
    };
    Line::from(vec![
        styled(label, theme::title()),
        spaces(pad),
        styled(value, value_style),
    ])
}

fn skill_row(category: &str, items: &str) -> Line<'static> {
    Line::from(vec![
        styled(category, theme::title()),
        spaces(11usize.saturating_sub(category.chars().count())),
        styled(items, theme::content()),
    ])
}

/// The built-in resume.
#[derive(Debug, Default, Clone, Copy)]
pub struct PortfolioContent;

impl PortfolioContent {
    fn experience(&self, lang: Language) -> Vec<Line<'static>> {
        let l = |key| t(lang, key);
        vec![
            tab_header(lang, "exp_title"),
            Line::default(),
            heading(format!("Gatewatcher ✕ {}", l("gw_title"))),
            body(l("gw_role")),
            labeled(l("mission"), l("gw_mission_1")),
            body(l("gw_mission_2")),
            body(l("gw_mission_3")),
            body(l("gw_mission_4")),
            body(l("gw_mission_5")),
            labeled(l("stack"), "Python, Ansible, Docker, Bash, Linux, CI/CD"),
            labeled(l("challenge"), l("gw_challenge")),
            labeled(l("feedback"), l("gw_feedback_1")),
            body(l("gw_feedback_2")),
            Line::default(),
            heading(format!("Etifak ✕ {}", l("etifak_title"))),
            body(l("etifak_role")),
            labeled(l("mission"), l("etifak_mission_1")),
            body(l("etifak_mission_2")),
            body(l("etifak_mission_3")),
            labeled(l("stack"), "Python, Django, PostgreSQL, Docker, AWS EC2"),
            labeled(l("challenge"), l("etifak_challenge")),
            labeled(l("feedback"), l("etifak_feedback")),
            Line::default(),
            heading(format!("Suez Digital Solutions ✕ {}", l("suez_title"))),
            body(l("suez_role")),
            labeled(l("mission"), l("suez_mission_1")),
            body(l("suez_mission_2")),
            labeled(l("stack"), "Python, Streamlit, Pandas, asyncio, Azure DevOps"),
            labeled(l("feedback"), l("suez_feedback")),
        ]
    }

    fn education(&self, lang: Language) -> Vec<Line<'static>> {
        let l = |key| t(lang, key);
        let mut lines = vec![tab_header(lang, "edu_title")];
        let schools: [(&str, &str, &str, &str, &[&str]); 3] = [
            (
                "ensisa_degree",
                "ensisa_school",
                "ensisa_period",
                "ensisa_loc",
                &["ensisa_desc_1", "ensisa_desc_2", "ensisa_desc_3"],
            ),
            (
                "cpge_degree",
                "cpge_school",
                "cpge_period",
                "cpge_loc",
                &["cpge_desc_1", "cpge_desc_2", "cpge_desc_3"],
            ),
            (
                "bac_degree",
                "bac_school",
                "bac_period",
                "bac_loc",
                &["bac_desc_1", "bac_desc_2"],
            ),
        ];
        for (degree, school, period, location, desc) in schools {
            lines.push(Line::default());
            lines.push(heading(l(degree)));
            lines.push(body(l(school)));
            lines.push(muted(format!("{} | {}", l(period), l(location))));
            lines.extend(desc.iter().map(|&key| body(l(key))));
        }
        lines
    }

    fn projects(&self, lang: Language) -> Vec<Line<'static>> {
        let l = |key| t(lang, key);
        let mut lines = vec![
            tab_header(lang, "proj_title"),
            Line::default(),
            link_heading("SimplyLovelySetups.com"),
            muted("Sept 2025 - Present"),
            body(l("sls_desc_1")),
            body(l("sls_desc_2")),
            body(l("sls_desc_3")),
            labeled(l("stack"), "FastAPI, SQLAlchemy, MongoDB, NextJS, Docker"),
            muted(l("sls_status")),
            Line::default(),
            link_heading(SITE),
            muted("Feb 2026 - Present"),
            body(l("termfolio_desc_1")),
            body(l("termfolio_desc_2")),
            body(l("termfolio_desc_3")),
            labeled(l("stack"), "Rust, ratatui, crossterm"),
            Line::from(vec![
                styled(l("termfolio_status"), theme::muted()),
                styled(format!(" {} ", l("termfolio_highlight")), theme::inverted()),
            ]),
            Line::default(),
            heading("MealPass"),
            muted("Mars 2025"),
            body(l("mealpass_desc_1")),
            body(l("mealpass_desc_2")),
            body(l("mealpass_desc_3")),
            labeled(l("stack"), "Django, PostgreSQL, Flutter, Dart, Docker"),
            muted(l("mealpass_status")),
        ];

        let school_projects = [
            ("NeoShape", "vectorart", "Java, JavaFX"),
            ("Nexus", "discordclone", "Python, Django, WebSocket, HTML/CSS"),
            ("NewMoodle", "schoolmgmt", "Python, Django, PostgreSQL, HTML/CSS"),
        ];
        for (name, key, stack) in school_projects {
            lines.push(Line::default());
            lines.push(heading(name));
            lines.push(muted("2024"));
            lines.push(body(l(project_key(key, "desc_1"))));
            lines.push(body(l(project_key(key, "desc_2"))));
            lines.push(labeled(l("stack"), stack));
            lines.push(muted(l(project_key(key, "status"))));
        }
        lines
    }

    fn skills(&self, lang: Language) -> Vec<Line<'static>> {
        vec![
            tab_header(lang, "skills_title"),
            Line::default(),
            skill_row("Languages", "Python, Go, Rust, TypeScript, JavaScript, Java, C, F#"),
            skill_row("Backend", "Django, DRF, FastAPI, PostgreSQL, MongoDB, SQLAlchemy"),
            skill_row("Frontend", "React.js, NextJS, Flutter, HTML/CSS"),
            skill_row("DevOps", "Docker, AWS, Azure, CI/CD, Linux, Ansible, Bash"),
            skill_row("Security", "Suricata, Network Analysis, Selenium, Beautiful Soup"),
            skill_row("Data", "Pandas, Streamlit, Azure ML"),
            skill_row("Tools", "Git, Scrum/Agile, Code Review, REST APIs"),
        ]
    }
}

/// Translation keys are static, so project keys are matched rather than built.
fn project_key(project: &str, field: &str) -> &'static str {
    match (project, field) {
        ("vectorart", "desc_1") => "vectorart_desc_1",
        ("vectorart", "desc_2") => "vectorart_desc_2",
        ("vectorart", _) => "vectorart_status",
        ("discordclone", "desc_1") => "discordclone_desc_1",
        ("discordclone", "desc_2") => "discordclone_desc_2",
        ("discordclone", _) => "discordclone_status",
        (_, "desc_1") => "schoolmgmt_desc_1",
        (_, "desc_2") => "schoolmgmt_desc_2",
        _ => "schoolmgmt_status",
    }
}

impl ContentProvider for PortfolioContent {
    fn left_panel(&self, lang: Language, panel_width: usize) -> Vec<Line<'static>> {
        let l = |key| t(lang, key);
        let mut lines = vec![muted(l("subtitle"))];
        lines.extend(NAME_BANNER.iter().map(|row| title(*row)));
        lines.push(Line::from(styled(
            repeat("─", panel_width.saturating_sub(2)),
            theme::border(),
        )));
        lines.push(info_row(l("email"), "simogacha@gmail.com", true));
        lines.push(info_row(l("location"), "France/Paris", false));
        lines.push(info_row(l("linkedin"), "linkedin.com/in/mohamed-gacha", true));
        lines.push(info_row(l("github"), "github.com/MohamedGacha", true));
        lines.push(Line::default());
        lines.push(title(l("bio_title")));
        lines.extend(["about_1", "about_2", "about_3"].map(|key| body(l(key))));
        lines.push(Line::default());
        lines.extend(["about_4", "about_5", "about_6"].map(|key| body(l(key))));
        lines
    }

    fn tab_content(&self, lang: Language, tab: Tab) -> Vec<Line<'static>> {
        match tab {
            Tab::Experience => self.experience(lang),
            Tab::Education => self.education(lang),
            Tab::Projects => self.projects(lang),
            Tab::Skills => self.skills(lang),
        }
    }

    fn site_label(&self) -> Span<'static> {
        styled(SITE, theme::link(theme::content()))
    }

    fn footer_hint(&self, lang: Language) -> String {
        t(lang, "footer").to_string()
    }
}
