//! # Translations
//!
//! Static English/French string tables. A lookup for a key that a table does
//! not contain returns the key itself, so a missing string shows up on screen
//! instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }

    /// Label shown in the language selector.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Fr => "FR",
        }
    }

    /// Parse a language code such as `en`, `FR` or `fr_FR.UTF-8`.
    pub fn from_code(code: &str) -> Option<Self> {
        let lower = code.trim().to_ascii_lowercase();
        if lower.starts_with("en") {
            Some(Language::En)
        } else if lower.starts_with("fr") {
            Some(Language::Fr)
        } else {
            None
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => EN,
            Language::Fr => FR,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Look up `key` in the table for `lang`, falling back to the key.
pub fn t(lang: Language, key: &'static str) -> &'static str {
    lang.table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

const EN: &[(&str, &str)] = &[
    ("subtitle", "Computer Science & Networks Engineer"),
    ("about_title", "About Me"),
    ("bio_title", "Biography"),
    ("about_1", "Engineer passionate about building"),
    ("about_2", "robust, meaningful systems — from scalable"),
    ("about_3", "backend APIs to cybersecurity solutions."),
    ("about_4", "Driven by curiosity and impact, with a focus"),
    ("about_5", "on system security and software quality."),
    ("about_6", "Also into F1, gaming, and astrophysics."),
    ("exp_title", "Experience"),
    ("exp_scroll", "(↑↓ to scroll)"),
    ("mission", "Mission:"),
    ("stack", "Stack:"),
    ("challenge", "Challenge:"),
    ("feedback", "Feedback:"),
    ("gw_role", "Paris | Oct 2025 - Sept 2026"),
    ("gw_mission_1", "Developing and maintaining GCap, Gatewatcher's NDR"),
    ("gw_mission_2", "(Network Detection & Response) solution, while working"),
    ("gw_mission_3", "on open-source security projects in parallel."),
    ("gw_mission_4", "Managing cloud infrastructure (Proxmox, Nutanix, Azure,"),
    ("gw_mission_5", "AWS) and building internal tooling for the team."),
    ("gw_challenge", "Ramped up on cybersecurity from the ground up."),
    ("gw_feedback_1", "Thriving in a fast-paced environment with a strong"),
    ("gw_feedback_2", "engineering culture and thoughtful use of AI."),
    ("gw_title", "Cybersecurity Engineer"),
    ("etifak_role", "Remote | Sept 2024 - Sept 2025"),
    ("etifak_title", "Backend Developer"),
    ("etifak_mission_1", "Led backend development for B2B marketplace"),
    ("etifak_mission_2", "at an early-stage startup. Built REST APIs, unit tests,"),
    ("etifak_mission_3", "and managed AWS deployment."),
    ("etifak_challenge", "Self-taught many concepts as a junior dev."),
    ("etifak_feedback", "Great team communication made workflow smooth!"),
    ("suez_role", "Paris | Jun - Aug 2024"),
    ("suez_title", "Data Engineer"),
    ("suez_mission_1", "Internship: Built intranet web app for data quality & cleaning."),
    ("suez_mission_2", "Implemented deduplication using Levenshtein distance."),
    ("suez_feedback", "First internship. Great Scrum team dynamics!"),
    ("proj_title", "Projects"),
    ("sls_desc_1", "Community-driven platform providing free car setups"),
    ("sls_desc_2", "for Assetto Corsa Competizione. Full-stack project"),
    ("sls_desc_3", "with REST API, database management, and modern frontend."),
    ("sls_status", "Status: Live & actively maintained"),
    ("mealpass_desc_1", "Mobile app managing food distributions for students"),
    ("mealpass_desc_2", "in need. QR-code based check-in system with real-time"),
    ("mealpass_desc_3", "tracking and admin dashboard."),
    ("mealpass_status", "Status: Completed — volunteer project for an association"),
    ("termfolio_desc_1", "Terminal-based portfolio with a custom-rendered UI."),
    ("termfolio_desc_2", "Interactive TUI with bilingual support and"),
    ("termfolio_desc_3", "hand-composed box-drawing frames."),
    ("termfolio_status", "Status: Live & actively maintained — "),
    ("termfolio_highlight", "you're looking at it"),
    ("vectorart_desc_1", "Illustrator-like vector drawing application with basic"),
    ("vectorart_desc_2", "shape tools, layers, and export features."),
    ("vectorart_status", "Status: Completed — 1st year project at ENSISA"),
    ("discordclone_desc_1", "Real-time messaging platform inspired by Discord"),
    ("discordclone_desc_2", "with channels, user auth, and live chat."),
    ("discordclone_status", "Status: Completed — 1st year project at ENSISA"),
    ("schoolmgmt_desc_1", "Management platform for students, courses, and grades"),
    ("schoolmgmt_desc_2", "with admin dashboard and role-based access."),
    ("schoolmgmt_status", "Status: Completed — 1st year project at ENSISA"),
    ("skills_title", "Skills"),
    ("edu_title", "Education"),
    ("ensisa_degree", "Engineering Degree: Computer Science & Networks"),
    ("ensisa_school", "ENSISA - National School of Engineers of South Alsace"),
    ("ensisa_period", "Sept 2023 - Sept 2026"),
    ("ensisa_loc", "Mulhouse, France"),
    ("ensisa_desc_1", "Software development, databases, DevOps,"),
    ("ensisa_desc_2", "networks & security, AI and deep learning."),
    ("ensisa_desc_3", "Hands-on projects in full-stack, cloud, and cybersecurity."),
    ("cpge_degree", "Preparatory Classes MPSI"),
    ("cpge_school", "Carnot Prépas"),
    ("cpge_period", "Sept 2021 - Jul 2023"),
    ("cpge_loc", "Meknes, Morocco"),
    ("cpge_desc_1", "Intensive program in Mathematics, Physics and"),
    ("cpge_desc_2", "Engineering Sciences. Developed strong analytical"),
    ("cpge_desc_3", "thinking and problem-solving skills."),
    ("bac_degree", "Baccalaureate - Science Math A"),
    ("bac_school", "Lycée Ajana"),
    ("bac_period", "2021"),
    ("bac_loc", "Meknes, Morocco"),
    ("bac_desc_1", "French Option. Strong foundation in mathematics"),
    ("bac_desc_2", "and scientific reasoning."),
    ("footer", "q: Quit • ←→: Navigate • Tab: Language"),
    ("welcome_hint", "Press any key to continue"),
    ("email", "Email"),
    ("location", "Location"),
    ("linkedin", "LinkedIn"),
    ("github", "GitHub"),
];

const FR: &[(&str, &str)] = &[
    ("subtitle", "Ingénieur en informatique et réseaux"),
    ("about_title", "À propos"),
    ("bio_title", "Biographie"),
    ("about_1", "Ingénieur passionné par la conception de"),
    ("about_2", "systèmes fiables et utiles — des APIs backend"),
    ("about_3", "scalables aux solutions de cybersécurité."),
    ("about_4", "Animé par la curiosité et l'impact, avec un"),
    ("about_5", "intérêt pour la sécurité et la qualité logicielle."),
    ("about_6", "Aussi passionné de F1, gaming et astrophysique."),
    ("exp_title", "Expériences"),
    ("exp_scroll", "(↑↓ pour défiler)"),
    ("mission", "Mission:"),
    ("stack", "Stack:"),
    ("challenge", "Défi:"),
    ("feedback", "Avis:"),
    ("gw_role", "Paris | Oct 2025 - Sept 2026"),
    ("gw_mission_1", "Développement et maintien de GCap, la solution NDR"),
    ("gw_mission_2", "(Network Detection & Response) de Gatewatcher, en"),
    ("gw_mission_3", "parallèle de projets open-source de sécurité."),
    ("gw_mission_4", "Gestion d'infrastructure cloud (Proxmox, Nutanix,"),
    ("gw_mission_5", "Azure, AWS) et création d'outillage interne."),
    ("gw_challenge", "Montée en compétence cybersécurité en partant de zéro."),
    ("gw_feedback_1", "Environnement stimulant avec une forte culture"),
    ("gw_feedback_2", "d'ingénierie et une utilisation réfléchie de l'IA."),
    ("gw_title", "Ingénieur Cybersécurité"),
    ("etifak_role", "Remote | Sept 2024 - Sept 2025"),
    ("etifak_title", "Développeur Backend"),
    ("etifak_mission_1", "Développement backend pour marketplace B2B"),
    ("etifak_mission_2", "dans une startup. APIs REST, tests unitaires,"),
    ("etifak_mission_3", "et déploiement AWS."),
    ("etifak_challenge", "Auto-apprentissage en tant que dev junior."),
    ("etifak_feedback", "Excellente communication d'équipe!"),
    ("suez_role", "Paris | Juin - Août 2024"),
    ("suez_title", "Data Engineer"),
    ("suez_mission_1", "Stage : Application intranet pour qualité des données."),
    ("suez_mission_2", "Déduplication avec distance de Levenshtein."),
    ("suez_feedback", "Premier stage. Super dynamique Scrum!"),
    ("proj_title", "Projets"),
    ("sls_desc_1", "Plateforme communautaire proposant des setups gratuits"),
    ("sls_desc_2", "pour Assetto Corsa Competizione. Projet full-stack avec"),
    ("sls_desc_3", "API REST, gestion de base de données et frontend moderne."),
    ("sls_status", "Statut : En ligne & maintenu activement"),
    ("mealpass_desc_1", "Application mobile de gestion de distributions"),
    ("mealpass_desc_2", "alimentaires pour étudiants précaires. Système de"),
    ("mealpass_desc_3", "check-in par QR-code avec suivi en temps réel."),
    ("mealpass_status", "Statut : Terminé — projet bénévole pour une association"),
    ("termfolio_desc_1", "Portfolio terminal avec une interface rendue à la main."),
    ("termfolio_desc_2", "TUI interactive avec support bilingue et"),
    ("termfolio_desc_3", "cadres composés en caractères box-drawing."),
    ("termfolio_status", "Statut : En ligne & maintenu — "),
    ("termfolio_highlight", "vous le consultez en ce moment"),
    ("vectorart_desc_1", "Application de dessin vectoriel type Illustrator avec"),
    ("vectorart_desc_2", "outils de formes, calques et export."),
    ("vectorart_status", "Statut : Terminé — projet 1ère année ENSISA"),
    ("discordclone_desc_1", "Plateforme de messagerie en temps réel inspirée de"),
    ("discordclone_desc_2", "Discord avec salons, authentification et chat en direct."),
    ("discordclone_status", "Statut : Terminé — projet 1ère année ENSISA"),
    ("schoolmgmt_desc_1", "Plateforme de gestion d'étudiants, cours et notes"),
    ("schoolmgmt_desc_2", "avec tableau de bord admin et accès par rôles."),
    ("schoolmgmt_status", "Statut : Terminé — projet 1ère année ENSISA"),
    ("skills_title", "Compétences"),
    ("edu_title", "Parcours_Académique"),
    ("ensisa_degree", "Diplôme d'ingénieur : Informatique et Réseaux"),
    ("ensisa_school", "ENSISA - École Nationale Supérieure d'Ingénieurs Sud-Alsace"),
    ("ensisa_period", "Sept 2023 - Sept 2026"),
    ("ensisa_loc", "Mulhouse, France"),
    ("ensisa_desc_1", "Développement logiciel, bases de données, DevOps,"),
    ("ensisa_desc_2", "réseaux et sécurité, IA et deep learning."),
    ("ensisa_desc_3", "Projets pratiques en full-stack, cloud et cybersécurité."),
    ("cpge_degree", "Classes Préparatoires MPSI"),
    ("cpge_school", "Carnot Prépas"),
    ("cpge_period", "Sept 2021 - Juil 2023"),
    ("cpge_loc", "Meknès, Maroc"),
    ("cpge_desc_1", "Programme intensif en Mathématiques, Physique et"),
    ("cpge_desc_2", "Sciences de l'Ingénieur. Développement de la rigueur"),
    ("cpge_desc_3", "analytique et des capacités de résolution de problèmes."),
    ("bac_degree", "Baccalauréat - Option Science Math A"),
    ("bac_school", "Lycée Ajana"),
    ("bac_period", "2021"),
    ("bac_loc", "Meknès, Maroc"),
    ("bac_desc_1", "Option Française. Solide formation en mathématiques"),
    ("bac_desc_2", "et raisonnement scientifique."),
    ("footer", "q: Quitter • ←→: Naviguer • Tab: Langue"),
    ("welcome_hint", "Appuyez sur une touche pour continuer"),
    ("email", "Email"),
    ("location", "Lieu"),
    ("linkedin", "LinkedIn"),
    ("github", "GitHub"),
];
