use crate::interest::domain::entities::{Interest, InterestData};

pub fn default_interests() -> Vec<Interest> {
    [
        (
            "1",
            "Open Source",
            "Contributing to open source projects and communities.",
            "🌐",
        ),
        (
            "2",
            "Machine Learning",
            "Exploring AI and machine learning applications.",
            "🤖",
        ),
        (
            "3",
            "Photography",
            "Capturing moments and landscapes through photography.",
            "📷",
        ),
    ]
    .into_iter()
    .map(|(id, name, description, icon)| Interest {
        id: id.to_string(),
        data: InterestData {
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        },
    })
    .collect()
}
