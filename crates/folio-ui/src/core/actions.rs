//! Actions invoked from inline page markup.
//!
//! The link actions are placeholders: instead of navigating they announce
//! where they would go.

use crate::config::LinkConfig;

/// An action triggered by page markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageAction {
    /// Smooth-scroll to the element with this id.
    ScrollToSection(String),
    /// Smooth-scroll to the top of the page.
    ScrollToTop,
    /// Request the CV download.
    DownloadCv,
    /// Open a project link of a given kind (`github`, `demo`).
    OpenProject {
        /// Link kind.
        kind: String,
        /// Project identifier.
        project: String,
    },
    /// Open the profile listing every project.
    ViewAllProjects,
    /// Use a contact channel (`email`, `phone`, `location`).
    ContactAction(String),
    /// Open a social profile.
    OpenSocial(String),
    /// Show an arbitrary toast.
    ShowToast {
        /// Toast title.
        title: String,
        /// Toast body.
        message: String,
    },
    /// Dismiss the toast.
    HideToast,
}

/// What the page should do for an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Show a toast.
    Toast {
        /// Toast title.
        title: String,
        /// Toast body.
        message: String,
    },
    /// Scroll to an element id.
    ScrollToElement(String),
    /// Scroll to the top of the page.
    ScrollToTop,
    /// Dismiss the toast.
    HideToast,
    /// Unknown link target; nothing happens.
    Ignored,
}

fn toast(title: &str, message: impl Into<String>) -> ActionOutcome {
    ActionOutcome::Toast {
        title: title.to_string(),
        message: message.into(),
    }
}

fn contact_verb(kind: &str) -> String {
    match kind {
        "email" => "open email client".to_string(),
        "phone" => "initiate call".to_string(),
        "location" => "open maps".to_string(),
        other => format!("open {other}"),
    }
}

/// Global functions the page markup calls, as published on `window`.
pub const MARKUP_FUNCTIONS: [&str; 8] = [
    "scrollToSection",
    "scrollToTop",
    "downloadCV",
    "openProject",
    "viewAllProjects",
    "contactAction",
    "openSocial",
    "hideToast",
];

impl PageAction {
    /// Map a markup call such as `openProject('demo', 'weather')` to its action.
    ///
    /// `args` holds the call's arguments in order; `None` marks one that was
    /// absent or not a string. Returns `None` for unknown functions and for
    /// calls missing a required argument.
    #[must_use]
    pub fn from_markup(function: &str, args: &[Option<String>]) -> Option<Self> {
        let arg = |index: usize| args.get(index).cloned().flatten();
        match function {
            "scrollToSection" => arg(0).map(Self::ScrollToSection),
            "scrollToTop" => Some(Self::ScrollToTop),
            "downloadCV" => Some(Self::DownloadCv),
            "openProject" => Some(Self::OpenProject {
                kind: arg(0)?,
                project: arg(1)?,
            }),
            "viewAllProjects" => Some(Self::ViewAllProjects),
            "contactAction" => arg(0).map(Self::ContactAction),
            "openSocial" => arg(0).map(Self::OpenSocial),
            "hideToast" => Some(Self::HideToast),
            _ => None,
        }
    }

    /// Resolve the action against the configured link tables.
    #[must_use]
    pub fn resolve(&self, links: &LinkConfig) -> ActionOutcome {
        match self {
            Self::ScrollToSection(id) => ActionOutcome::ScrollToElement(id.clone()),
            Self::ScrollToTop => ActionOutcome::ScrollToTop,
            Self::DownloadCv => toast("CV Download", "CV download feature coming soon!"),
            Self::OpenProject { kind, project } => links
                .projects
                .get(kind)
                .and_then(|table| table.get(project))
                .map_or(ActionOutcome::Ignored, |url| {
                    toast("Project Link", format!("Would open: {url}"))
                }),
            Self::ViewAllProjects => toast(
                "GitHub Profile",
                "Would open GitHub profile with all projects",
            ),
            Self::ContactAction(kind) => {
                if links.contact.contains_key(kind) {
                    toast("Contact Action", format!("Would {}", contact_verb(kind)))
                } else {
                    ActionOutcome::Ignored
                }
            }
            Self::OpenSocial(platform) => links
                .social
                .get(platform)
                .map_or(ActionOutcome::Ignored, |url| {
                    toast("Social Link", format!("Would open: {url}"))
                }),
            Self::ShowToast { title, message } => toast(title, message.clone()),
            Self::HideToast => ActionOutcome::HideToast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(outcome: ActionOutcome) -> Option<String> {
        match outcome {
            ActionOutcome::Toast { message, .. } => Some(message),
            _ => None,
        }
    }

    #[test]
    fn known_project_links_announce_their_url() {
        let links = LinkConfig::default();
        let outcome = PageAction::OpenProject {
            kind: "demo".to_string(),
            project: "weather".to_string(),
        }
        .resolve(&links);
        assert_eq!(
            outcome,
            ActionOutcome::Toast {
                title: "Project Link".to_string(),
                message: "Would open: https://demo-weather.com".to_string(),
            }
        );
    }

    #[test]
    fn missing_demo_link_is_ignored() {
        let links = LinkConfig::default();
        let outcome = PageAction::OpenProject {
            kind: "demo".to_string(),
            project: "analytics".to_string(),
        }
        .resolve(&links);
        assert_eq!(outcome, ActionOutcome::Ignored);
    }

    #[test]
    fn contact_actions_describe_channel() {
        let links = LinkConfig::default();
        let resolve = |kind: &str| message_of(PageAction::ContactAction(kind.to_string()).resolve(&links));
        assert_eq!(resolve("email").as_deref(), Some("Would open email client"));
        assert_eq!(resolve("phone").as_deref(), Some("Would initiate call"));
        assert_eq!(resolve("location").as_deref(), Some("Would open maps"));
        assert_eq!(resolve("fax"), None);
    }

    #[test]
    fn social_links_follow_config() {
        let links = LinkConfig::default();
        assert_eq!(
            message_of(PageAction::OpenSocial("linkedin".to_string()).resolve(&links)).as_deref(),
            Some("Would open: https://linkedin.com/in/johndoe")
        );
        assert_eq!(
            PageAction::OpenSocial("myspace".to_string()).resolve(&links),
            ActionOutcome::Ignored
        );
    }

    #[test]
    fn markup_calls_map_to_actions() {
        let arg = |raw: &str| Some(raw.to_string());
        assert_eq!(
            PageAction::from_markup("openProject", &[arg("github"), arg("ecommerce")]),
            Some(PageAction::OpenProject {
                kind: "github".to_string(),
                project: "ecommerce".to_string(),
            })
        );
        assert_eq!(
            PageAction::from_markup("scrollToSection", &[arg("contact")]),
            Some(PageAction::ScrollToSection("contact".to_string()))
        );
        assert_eq!(PageAction::from_markup("downloadCV", &[]), Some(PageAction::DownloadCv));
        assert_eq!(PageAction::from_markup("hideToast", &[None, None]), Some(PageAction::HideToast));
    }

    #[test]
    fn every_markup_function_is_recognised() {
        let args = vec![Some("x".to_string()), Some("y".to_string())];
        for function in MARKUP_FUNCTIONS {
            assert!(
                PageAction::from_markup(function, &args).is_some(),
                "{function} has no action"
            );
        }
    }

    #[test]
    fn markup_calls_missing_arguments_are_rejected() {
        assert_eq!(PageAction::from_markup("openSocial", &[None]), None);
        assert_eq!(
            PageAction::from_markup("openProject", &[Some("demo".to_string())]),
            None
        );
        assert_eq!(PageAction::from_markup("startPortfolio", &[]), None);
    }

    #[test]
    fn scroll_actions_pass_through() {
        let links = LinkConfig::default();
        assert_eq!(
            PageAction::ScrollToSection("contact".to_string()).resolve(&links),
            ActionOutcome::ScrollToElement("contact".to_string())
        );
        assert_eq!(
            PageAction::ScrollToTop.resolve(&links),
            ActionOutcome::ScrollToTop
        );
    }
}
