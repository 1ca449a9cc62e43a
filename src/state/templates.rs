//! Quick-start templates offered on the design tab.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

/// A canned prompt the viewer can start from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

pub static TEMPLATES: [Template; 4] = [
    Template {
        id: "poll",
        name: "Poll",
        description: "Create a simple poll with multiple options",
        prompt: "Create a poll about favorite programming languages with options: JavaScript, Python, Rust, Other",
    },
    Template {
        id: "quiz",
        name: "Quiz",
        description: "Create a quiz with questions and answers",
        prompt: "Create a quiz about web3 knowledge with 3 questions",
    },
    Template {
        id: "profile",
        name: "Profile Card",
        description: "Display user profile information",
        prompt: "Create a profile card that shows user's name, bio, and stats",
    },
    Template {
        id: "meme",
        name: "Meme Generator",
        description: "Generate custom memes",
        prompt: "Create a meme generator with customizable text",
    },
];

/// Look up a template by id.
pub fn find(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}
