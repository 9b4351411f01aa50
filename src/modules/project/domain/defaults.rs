use super::entities::{Project, ProjectData};

/// Fallback project list served whenever the backend is unreachable or the
/// collection is empty. Ids are stable so deep links keep working offline.
pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            data: ProjectData {
                title: "E-commerce Platform".to_string(),
                description: "A full-featured e-commerce platform with product management, \
                              shopping cart, and payment processing."
                    .to_string(),
                technologies: vec![
                    "React".to_string(),
                    "Node.js".to_string(),
                    "MongoDB".to_string(),
                    "Stripe".to_string(),
                ],
                image_url: "/placeholder.svg?height=200&width=400".to_string(),
                demo_url: Some("https://example.com".to_string()),
                github_url: Some("https://github.com/example/ecommerce".to_string()),
                detailed_description: Some(
                    "This e-commerce platform provides a complete solution for online stores, \
                     featuring product management, inventory tracking, shopping cart \
                     functionality, secure checkout with Stripe integration, and order \
                     management."
                        .to_string(),
                ),
                role: Some("Lead Developer".to_string()),
                contribution: Some(
                    "As the lead developer, I was responsible for the overall architecture, \
                     frontend development using React, and integration with the Stripe payment \
                     gateway. I also implemented the shopping cart functionality and user \
                     authentication system."
                        .to_string(),
                ),
                additional_images: vec![],
                features: vec![
                    "User authentication and profile management".to_string(),
                    "Product catalog with search and filtering".to_string(),
                    "Shopping cart and checkout process".to_string(),
                    "Payment processing with Stripe".to_string(),
                    "Order tracking and history".to_string(),
                ],
                challenges: Some(
                    "One of the main challenges was implementing a real-time inventory system \
                     that could handle high traffic and prevent overselling products."
                        .to_string(),
                ),
                duration: Some("6 months".to_string()),
            },
        },
        Project {
            id: "2".to_string(),
            data: ProjectData {
                title: "Task Management App".to_string(),
                description:
                    "A productivity application for managing tasks, projects, and team \
                     collaboration."
                        .to_string(),
                technologies: vec![
                    "Next.js".to_string(),
                    "TypeScript".to_string(),
                    "Firebase".to_string(),
                    "Tailwind CSS".to_string(),
                ],
                image_url: "/placeholder.svg?height=200&width=400".to_string(),
                demo_url: None,
                github_url: Some("https://github.com/example/taskmanager".to_string()),
                detailed_description: Some(
                    "This task management application helps teams organize their work, track \
                     progress, and collaborate effectively. It features task creation, \
                     assignment, due dates, priority levels, and project grouping."
                        .to_string(),
                ),
                role: Some("Full Stack Developer".to_string()),
                contribution: Some(
                    "I designed and implemented the entire application, including the frontend \
                     using Next.js and TypeScript, and the backend using Firebase. I also \
                     implemented real-time updates and notifications using Firebase's \
                     real-time database."
                        .to_string(),
                ),
                additional_images: vec![],
                features: vec![
                    "Task creation and assignment".to_string(),
                    "Project organization and grouping".to_string(),
                    "Due date and priority management".to_string(),
                    "Team collaboration and comments".to_string(),
                    "Real-time updates and notifications".to_string(),
                ],
                challenges: Some(
                    "Implementing real-time updates across multiple clients while maintaining \
                     performance was a significant challenge."
                        .to_string(),
                ),
                duration: Some("4 months".to_string()),
            },
        },
    ]
}
