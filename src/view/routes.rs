//! Links to the platform pages an idea card points at

use crate::types::IdeaId;

pub const SUBMIT_IDEA: &str = "/submitIdea";

pub fn idea_detail(id: &IdeaId) -> String {
    format!("/detailIdea/{id}")
}

pub fn idea_analysis(id: &IdeaId) -> String {
    format!("/IdeaAnalysis/{id}")
}
