use std::collections::BTreeMap;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Link value meaning "the project exists but has no public link yet".
pub const PLACEHOLDER_LINK: &str = "#";

const PORTFOLIO_FILE: &str = "portfolio.json";
const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentFiles;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse content: {0}")]
    ParseError(String),
    #[error("invalid link for {owner}: {link}")]
    InvalidLink { owner: String, link: String },
    #[error("skill category listed more than once: {0:?}")]
    DuplicateCategory(SkillCategory),
    #[error("skill category missing: {0:?}")]
    MissingCategory(SkillCategory),
    #[error("invalid contact email: {0}")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    pub internships: Vec<Internship>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub email: String,
    pub photo: String,
    pub resume: String,
    pub skills: Vec<SkillGroup>,
    pub social: BTreeMap<Platform, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Languages,
    Technical,
    Devops,
    Apis,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Languages,
        SkillCategory::Technical,
        SkillCategory::Devops,
        SkillCategory::Apis,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::Technical => "Technical Frameworks & DBs",
            SkillCategory::Devops => "DevOps & Hosting",
            SkillCategory::Apis => "APIs & Tools Used",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SkillCategory::Languages => "⌨️",
            SkillCategory::Technical => "🧱",
            SkillCategory::Devops => "☁️",
            SkillCategory::Apis => "🔌",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    GitHub,
    LinkedIn,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Internship {
    pub company: String,
    pub role: String,
    /// Free text, e.g. "June 2024 - Aug 2024" or "1 Week Intensive".
    pub period: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: String,
    pub image: String,
}

/// Hosting services whose links are rendered as "view source".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeHost {
    GitHub,
    GitLab,
    Bitbucket,
}

impl CodeHost {
    const ALL: [CodeHost; 3] = [CodeHost::GitHub, CodeHost::GitLab, CodeHost::Bitbucket];

    pub fn domain(self) -> &'static str {
        match self {
            CodeHost::GitHub => "github.com",
            CodeHost::GitLab => "gitlab.com",
            CodeHost::Bitbucket => "bitbucket.org",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            CodeHost::GitHub => "devicon-github-plain",
            CodeHost::GitLab => "devicon-gitlab-plain",
            CodeHost::Bitbucket => "devicon-bitbucket-original",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Placeholder,
    Source(CodeHost),
    LiveDemo,
}

impl LinkKind {
    pub fn classify(link: &str) -> Self {
        if link == PLACEHOLDER_LINK {
            return LinkKind::Placeholder;
        }
        CodeHost::ALL
            .into_iter()
            .find(|host| link.contains(host.domain()))
            .map(LinkKind::Source)
            .unwrap_or(LinkKind::LiveDemo)
    }

    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Placeholder => "In Development (Private)",
            LinkKind::Source(_) => "View Source Code",
            LinkKind::LiveDemo => "Live Demo",
        }
    }

    /// Anchor target for `link`, or `None` when it must render as plain text.
    pub fn href(self, link: &str) -> Option<&str> {
        match self {
            LinkKind::Placeholder => None,
            LinkKind::Source(_) | LinkKind::LiveDemo => Some(link),
        }
    }
}

/// Returns the embedded portfolio, parsed on first use.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

pub fn load(name: &str) -> Result<Portfolio, ContentError> {
    let file = ContentFiles::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    let portfolio = Portfolio::from_json(&file.data)?;
    log::debug!(
        "loaded {name}: {} internships, {} projects",
        portfolio.internships.len(),
        portfolio.projects.len()
    );
    Ok(portfolio)
}

impl Portfolio {
    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        let portfolio = serde_json::from_slice::<Portfolio>(data)
            .map_err(|e| ContentError::ParseError(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        self.profile.validate()?;
        for job in &self.internships {
            if let Some(link) = &job.link {
                check_link(&job.company, link)?;
            }
        }
        for project in &self.projects {
            check_link(&project.title, &project.link)?;
        }
        Ok(())
    }
}

impl Profile {
    fn validate(&self) -> Result<(), ContentError> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(ContentError::InvalidEmail(self.email.clone()));
        }
        for (i, group) in self.skills.iter().enumerate() {
            if self.skills[..i].iter().any(|g| g.category == group.category) {
                return Err(ContentError::DuplicateCategory(group.category));
            }
        }
        if let Some(missing) = SkillCategory::ALL
            .into_iter()
            .find(|c| !self.skills.iter().any(|g| g.category == *c))
        {
            return Err(ContentError::MissingCategory(missing));
        }
        for (platform, link) in &self.social {
            // social links are always public
            if link == PLACEHOLDER_LINK {
                return Err(ContentError::InvalidLink {
                    owner: format!("{platform:?}"),
                    link: link.clone(),
                });
            }
            check_link(&format!("{platform:?}"), link)?;
        }
        Ok(())
    }

    pub fn skill_group(&self, category: SkillCategory) -> Option<&SkillGroup> {
        self.skills.iter().find(|g| g.category == category)
    }

    pub fn social_link(&self, platform: Platform) -> Option<&str> {
        self.social.get(&platform).map(String::as_str)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// First word of the name, used as the brand mark in the nav bar.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn fallback_avatar_url(&self) -> Option<String> {
        let name = self.name.split_whitespace().collect::<Vec<_>>().join(" ");
        Url::parse_with_params(
            AVATAR_SERVICE,
            &[("name", name.as_str()), ("background", "random"), ("size", "400")],
        )
        .map(String::from)
        .ok()
    }

    /// Source to swap in after the photo at `failed_src` fails to load.
    ///
    /// Returns `None` once the fallback itself has failed so a broken avatar
    /// service can't cause an error loop. Both sides are compared as parsed
    /// URLs since the browser reports `src` in its own encoding.
    pub fn photo_fallback(&self, failed_src: &str) -> Option<String> {
        let fallback = self.fallback_avatar_url()?;
        match (Url::parse(failed_src), Url::parse(&fallback)) {
            (Ok(failed), Ok(ours)) if failed == ours => None,
            _ => Some(fallback),
        }
    }

    pub fn copyright(&self, year: i32) -> String {
        format!("© {year} {}. All rights reserved.", self.name)
    }
}

fn check_link(owner: &str, link: &str) -> Result<(), ContentError> {
    if link == PLACEHOLDER_LINK {
        return Ok(());
    }
    let invalid = || ContentError::InvalidLink {
        owner: owner.to_string(),
        link: link.to_string(),
    };
    let url = Url::parse(link).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json(project_link: &str) -> String {
        format!(
            r##"{{
                "profile": {{
                    "name": "Ada Lovelace",
                    "role": "Engineer",
                    "bio": "Bio",
                    "email": "ada@example.com",
                    "photo": "/ada.jpeg",
                    "resume": "/resume.pdf",
                    "skills": [
                        {{ "category": "languages", "skills": ["Rust"] }},
                        {{ "category": "technical", "skills": ["Leptos"] }},
                        {{ "category": "devops", "skills": ["Git"] }},
                        {{ "category": "apis", "skills": ["REST"] }}
                    ],
                    "social": {{ "github": "https://github.com/ada" }}
                }},
                "internships": [
                    {{ "company": "Analytical", "role": "Intern", "period": "1843",
                       "description": "Notes", "tech": ["Engines"] }}
                ],
                "projects": [
                    {{ "title": "Notes", "description": "G", "tags": ["math"],
                       "link": "{project_link}", "image": "/notes.png" }}
                ]
            }}"##
        )
    }

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = portfolio().expect("embedded content should be valid");
        assert!(!portfolio.profile.name.is_empty());
        assert_eq!(portfolio.profile.skills.len(), SkillCategory::ALL.len());
        assert!(!portfolio.projects.is_empty());
        assert!(portfolio.profile.social_link(Platform::GitHub).is_some());
        assert!(portfolio.profile.social_link(Platform::LinkedIn).is_some());
    }

    #[test]
    fn test_missing_content_file() {
        assert_eq!(
            load("nope.json"),
            Err(ContentError::NotFound("nope.json".to_string()))
        );
    }

    #[test]
    fn test_optional_internship_link() {
        let portfolio = Portfolio::from_json(sample_json("#").as_bytes()).unwrap();
        assert_eq!(portfolio.internships[0].link, None);
        assert_eq!(portfolio.projects[0].link, PLACEHOLDER_LINK);
    }

    #[test]
    fn test_rejects_relative_link() {
        let res = Portfolio::from_json(sample_json("/notes").as_bytes());
        assert!(matches!(res, Err(ContentError::InvalidLink { .. })));

        let res = Portfolio::from_json(sample_json("ftp://example.com/notes").as_bytes());
        assert!(matches!(res, Err(ContentError::InvalidLink { .. })));
    }

    #[test]
    fn test_rejects_bad_json() {
        let res = Portfolio::from_json(b"{ \"profile\": 1 }");
        assert!(matches!(res, Err(ContentError::ParseError(_))));
    }

    #[test]
    fn test_skill_categories_validated() {
        let dup = sample_json("#").replace("\"technical\"", "\"languages\"");
        assert_eq!(
            Portfolio::from_json(dup.as_bytes()),
            Err(ContentError::DuplicateCategory(SkillCategory::Languages))
        );

        let mut portfolio = serde_json::from_str::<Portfolio>(&sample_json("#")).unwrap();
        portfolio
            .profile
            .skills
            .retain(|g| g.category != SkillCategory::Apis);
        assert_eq!(
            portfolio.validate(),
            Err(ContentError::MissingCategory(SkillCategory::Apis))
        );
    }

    #[test]
    fn test_rejects_bad_email() {
        let json = sample_json("#").replace("ada@example.com", "ada");
        assert_eq!(
            Portfolio::from_json(json.as_bytes()),
            Err(ContentError::InvalidEmail("ada".to_string()))
        );
    }

    #[test]
    fn test_link_classification() {
        assert_eq!(LinkKind::classify("#"), LinkKind::Placeholder);
        assert_eq!(
            LinkKind::classify("https://github.com/x/y"),
            LinkKind::Source(CodeHost::GitHub)
        );
        assert_eq!(
            LinkKind::classify("https://gitlab.com/x/y"),
            LinkKind::Source(CodeHost::GitLab)
        );
        assert_eq!(
            LinkKind::classify("https://panchapalidurgamata.org/"),
            LinkKind::LiveDemo
        );
    }

    #[test]
    fn test_link_labels_and_targets() {
        let placeholder = LinkKind::classify("#");
        assert_eq!(placeholder.label(), "In Development (Private)");
        assert_eq!(placeholder.href("#"), None);

        let link = "https://github.com/x/y";
        let source = LinkKind::classify(link);
        assert_eq!(source.label(), "View Source Code");
        assert_eq!(source.href(link), Some(link));
        assert_eq!(CodeHost::GitHub.icon_class(), "devicon-github-plain");

        let link = "https://example.com";
        let demo = LinkKind::classify(link);
        assert_eq!(demo.label(), "Live Demo");
        assert_eq!(demo.href(link), Some(link));
    }

    #[test]
    fn test_profile_helpers() {
        let portfolio = Portfolio::from_json(sample_json("#").as_bytes()).unwrap();
        let profile = &portfolio.profile;
        assert_eq!(profile.first_name(), "Ada");
        assert_eq!(profile.mailto(), "mailto:ada@example.com");
        assert_eq!(
            profile.fallback_avatar_url().as_deref(),
            Some("https://ui-avatars.com/api/?name=Ada+Lovelace&background=random&size=400")
        );
        assert_eq!(
            profile
                .skill_group(SkillCategory::Technical)
                .map(|g| g.skills.clone()),
            Some(vec!["Leptos".to_string()])
        );
        assert_eq!(profile.social_link(Platform::LinkedIn), None);
        assert_eq!(profile.copyright(2031), "© 2031 Ada Lovelace. All rights reserved.");
    }

    fn profile_named(name: &str) -> Profile {
        let mut portfolio = Portfolio::from_json(sample_json("#").as_bytes()).unwrap();
        portfolio.profile.name = name.to_string();
        portfolio.profile
    }

    fn name_param(url: &str) -> Option<String> {
        Url::parse(url)
            .ok()?
            .query_pairs()
            .find(|(k, _)| k == "name")
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_photo_fallback_does_not_loop() {
        let profile = profile_named("Ada Lovelace");
        let fallback = profile.photo_fallback("https://example.com/ada.jpeg").unwrap();
        assert_eq!(Some(fallback.clone()), profile.fallback_avatar_url());
        assert_eq!(profile.photo_fallback(&fallback), None);
    }

    #[test]
    fn test_photo_fallback_non_ascii_name() {
        let profile = profile_named("José Núñez");
        let fallback = profile.fallback_avatar_url().unwrap();
        assert_eq!(name_param(&fallback).as_deref(), Some("José Núñez"));

        // the browser reports the percent-encoded form
        let reported =
            "https://ui-avatars.com/api/?name=Jos%C3%A9+N%C3%BA%C3%B1ez&background=random&size=400";
        assert_eq!(profile.photo_fallback(reported), None);
        assert_eq!(profile.photo_fallback(&fallback), None);
    }

    #[test]
    fn test_fallback_keeps_ampersand_in_name() {
        let profile = profile_named("Tom & Jerry");
        let fallback = profile.fallback_avatar_url().unwrap();
        assert_eq!(name_param(&fallback).as_deref(), Some("Tom & Jerry"));
        assert_eq!(profile.photo_fallback(&fallback), None);
    }
}
