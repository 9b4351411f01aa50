use serde::{Deserialize, Serialize};

/// Closed set of built-in icons the dashboard can assign to a skill.
/// Stored by name; anything outside this list is rejected at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillIcon {
    Code,
    Database,
    Server,
    Globe,
    Cpu,
    GitBranch,
    Layers,
    Workflow,
    BrainCircuit,
    Users,
}

impl SkillIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillIcon::Code => "code",
            SkillIcon::Database => "database",
            SkillIcon::Server => "server",
            SkillIcon::Globe => "globe",
            SkillIcon::Cpu => "cpu",
            SkillIcon::GitBranch => "git-branch",
            SkillIcon::Layers => "layers",
            SkillIcon::Workflow => "workflow",
            SkillIcon::BrainCircuit => "brain-circuit",
            SkillIcon::Users => "users",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "code" => Some(SkillIcon::Code),
            "database" => Some(SkillIcon::Database),
            "server" => Some(SkillIcon::Server),
            "globe" => Some(SkillIcon::Globe),
            "cpu" => Some(SkillIcon::Cpu),
            "git-branch" => Some(SkillIcon::GitBranch),
            "layers" => Some(SkillIcon::Layers),
            "workflow" => Some(SkillIcon::Workflow),
            "brain-circuit" => Some(SkillIcon::BrainCircuit),
            "users" => Some(SkillIcon::Users),
            _ => None,
        }
    }
}

/// What the public site should actually render for a skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayIcon {
    /// Uploaded image, served by URL.
    Url(String),
    Builtin(SkillIcon),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillData {
    pub name: String,

    /// Matches a `SkillCategory` name by convention; not enforced.
    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<SkillIcon>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl SkillData {
    /// An uploaded icon image always wins over a builtin name; with
    /// neither set the default is the code glyph.
    pub fn display_icon(&self) -> DisplayIcon {
        match &self.icon_url {
            Some(url) if !url.is_empty() => DisplayIcon::Url(url.clone()),
            _ => DisplayIcon::Builtin(self.icon.unwrap_or(SkillIcon::Code)),
        }
    }

    /// In-category display position; skills without an explicit order
    /// sort as 1, not last.
    pub fn sort_order(&self) -> i32 {
        self.order.unwrap_or(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,

    #[serde(flatten)]
    pub data: SkillData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategoryData {
    pub name: String,

    /// Display sequence, ascending. Unique by convention only.
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,

    #[serde(flatten)]
    pub data: SkillCategoryData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}
