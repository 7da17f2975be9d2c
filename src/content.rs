//! `content.rs` - Section records shown in the content panel.
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Errors raised while loading section content
#[derive(Debug)]
pub enum ContentError {
    /// The content file could not be read
    Io(String),

    /// The content file is not valid TOML for a section list
    Parse(String),

    /// The file parsed but holds no sections
    Empty,
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(msg) => write!(f, "Content read error: {}", msg),
            ContentError::Parse(msg) => write!(f, "Content parse error: {}", msg),
            ContentError::Empty => write!(f, "Content error: no sections defined"),
        }
    }
}

impl Error for ContentError {}

impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        ContentError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ContentError {
    fn from(err: toml::de::Error) -> Self {
        ContentError::Parse(err.to_string())
    }
}

pub type ContentResult<T> = Result<T, ContentError>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Service {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExperienceEntry {
    pub title: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactLink {
    pub title: String,
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    Intro { headline: String, tagline: String },
    Services { items: Vec<Service> },
    Experience { entries: Vec<ExperienceEntry> },
    Skills { items: Vec<String> },
    Contacts { links: Vec<ContactLink> },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
}

impl Section {
    /// Number of entries the work slider rotates over, zero for other kinds.
    pub fn slider_len(&self) -> usize {
        match &self.body {
            SectionBody::Experience { entries } => entries.len(),
            _ => 0,
        }
    }
}

#[derive(Deserialize, Serialize)]
struct ContentFile {
    sections: Vec<Section>,
}

/// Ordered, non-empty list of sections. Fixed once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionList {
    sections: Vec<Section>,
}

impl SectionList {
    pub fn new(sections: Vec<Section>) -> ContentResult<Self> {
        if sections.is_empty() {
            return Err(ContentError::Empty);
        }
        Ok(Self { sections })
    }

    pub fn from_toml(content: &str) -> ContentResult<Self> {
        let file: ContentFile = toml::from_str(content)?;
        Self::new(file.sections)
    }

    pub fn load(path: &Path) -> ContentResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> ContentResult<String> {
        let file = ContentFile {
            sections: self.sections.clone(),
        };
        toml::to_string_pretty(&file).map_err(|e| ContentError::Parse(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }

    /// Index of the first experience section, which hosts the work slider.
    pub fn experience_index(&self) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| matches!(s.body, SectionBody::Experience { .. }))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SectionList {
    fn default() -> Self {
        let sections = vec![
            Section {
                title: String::from("Intro"),
                body: SectionBody::Intro {
                    headline: String::from("G4M4"),
                    tagline: String::from("Interfaces, websites and web applications"),
                },
            },
            Section {
                title: String::from("Services"),
                body: SectionBody::Services {
                    items: vec![
                        Service {
                            title: String::from("Interface design"),
                            subtitle: String::from("from 2.5k $ about 1 month"),
                            description: String::from(
                                "A user-friendly interface with simplicity for the end user as the main priority",
                            ),
                        },
                        Service {
                            title: String::from("Websites"),
                            subtitle: String::from("from 6k $ about 1-2 months"),
                            description: String::from(
                                "Launch of a new website or a redesign of an existing one",
                            ),
                        },
                        Service {
                            title: String::from("Web applications"),
                            subtitle: String::from("from 15k $ about 2-6 months"),
                            description: String::from(
                                "User profiles, chats, business logic and complex forms on top of a website",
                            ),
                        },
                    ],
                },
            },
            Section {
                title: String::from("Portfolio"),
                body: SectionBody::Experience {
                    entries: vec![
                        ExperienceEntry {
                            title: String::from("Freelance since 2015"),
                            highlights: strings(&[
                                "Web development using Wordpress/Joomla",
                                "Simple works with html/css",
                                "Implementation of ready-made solutions on PHP",
                            ]),
                        },
                        ExperienceEntry {
                            title: String::from("Web studio since 2016 as html coder"),
                            highlights: strings(&[
                                "Gulp, Pug/HTML, SCSS/CSS, BEM",
                                "Cross-browser sites IE9+",
                                "jQuery and jQuery plugins",
                            ]),
                        },
                        ExperienceEntry {
                            title: String::from("Web studio since 2017 as a frontend developer"),
                            highlights: strings(&[
                                "Cross-browser sites especially Safari",
                                "React, Redux, Atlassian Kit for React",
                                "Jira client-side plugin development",
                            ]),
                        },
                        ExperienceEntry {
                            title: String::from("Startup since 2018 as a frontend developer"),
                            highlights: strings(&[
                                "React, Mobx, mobx state tree, Ant design",
                                "Tests with jest, enzyme",
                                "Code review",
                            ]),
                        },
                    ],
                },
            },
            Section {
                title: String::from("Skills"),
                body: SectionBody::Skills {
                    items: strings(&[
                        "Javascript, ES6, Typescript",
                        "React/Redux/Mobx, Vue/Vuex",
                        "Nodejs, Express, Mongoose",
                        "CSS, SASS, Stylus",
                        "HTML, Pug(Jade), BEM",
                        "Jest, Enzyme",
                        "Webpack, gulp",
                        "Git",
                    ]),
                },
            },
            Section {
                title: String::from("Contact us"),
                body: SectionBody::Contacts {
                    links: vec![
                        ContactLink {
                            title: String::from("e-mail"),
                            href: String::from("mailto:hello@example.com"),
                            text: String::from("hello@example.com"),
                        },
                        ContactLink {
                            title: String::from("telegram"),
                            href: String::from("https://telegram.me/example"),
                            text: String::from("example"),
                        },
                    ],
                },
            },
        ];
        Self { sections }
    }
}
