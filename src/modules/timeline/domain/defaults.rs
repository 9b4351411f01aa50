use chrono::NaiveDate;

use crate::timeline::domain::entities::{Education, EducationData, Experience, ExperienceData};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn default_experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".to_string(),
            data: ExperienceData {
                company: "Tech Innovators".to_string(),
                position: "Senior Software Engineer".to_string(),
                start_date: date(2020, 1, 1),
                end_date: None,
                description:
                    "Leading development of cloud-based solutions using React, Node.js, and AWS."
                        .to_string(),
                location: "San Francisco, CA".to_string(),
            },
        },
        Experience {
            id: "2".to_string(),
            data: ExperienceData {
                company: "Digital Solutions Inc.".to_string(),
                position: "Software Engineer".to_string(),
                start_date: date(2017, 3, 15),
                end_date: Some(date(2019, 12, 31)),
                description:
                    "Developed and maintained web applications using React and Express."
                        .to_string(),
                location: "Seattle, WA".to_string(),
            },
        },
    ]
}

pub fn default_education() -> Vec<Education> {
    vec![
        Education {
            id: "1".to_string(),
            data: EducationData {
                institution: "Stanford University".to_string(),
                degree: "Master of Science".to_string(),
                field: "Computer Science".to_string(),
                start_date: date(2015, 9, 1),
                end_date: Some(date(2017, 6, 30)),
                description: "Specialized in Artificial Intelligence and Machine Learning."
                    .to_string(),
                location: "Stanford, CA".to_string(),
                logo_url: None,
            },
        },
        Education {
            id: "2".to_string(),
            data: EducationData {
                institution: "University of Washington".to_string(),
                degree: "Bachelor of Science".to_string(),
                field: "Computer Engineering".to_string(),
                start_date: date(2011, 9, 1),
                end_date: Some(date(2015, 6, 30)),
                description:
                    "Graduated with honors. Participated in various hackathons and coding competitions."
                        .to_string(),
                location: "Seattle, WA".to_string(),
                logo_url: None,
            },
        },
    ]
}
