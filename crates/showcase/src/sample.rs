//! Placeholder projects for demo builds.

use showcase_core::Project;

/// Fixed list shown instead of an error when the fallback is `sample`.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: "sample-portfolio".to_string(),
            name: "Portfolio".to_string(),
            framework: Some("vite".to_string()),
            link: Some("https://portfolio.example.com".to_string()),
            updated_at: 1_735_689_600_000,
        },
        Project {
            id: "sample-blog".to_string(),
            name: "Blog".to_string(),
            framework: Some("nextjs".to_string()),
            link: Some("https://blog-demo.vercel.app".to_string()),
            updated_at: 1_733_011_200_000,
        },
        Project {
            id: "sample-playground".to_string(),
            name: "Playground".to_string(),
            framework: None,
            link: None,
            updated_at: 1_730_419_200_000,
        },
    ]
}
