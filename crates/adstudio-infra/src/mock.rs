//! Seeded data standing in for a backend.
//!
//! Every list the dashboard shows (projects, templates, notifications,
//! billing history, help-center FAQs) starts from these fixtures, as does
//! the account profile.

use adstudio_types::account::Profile;
use adstudio_types::billing::{Transaction, TransactionStatus};
use adstudio_types::designer::Scene;
use adstudio_types::notification::{Notification, NotificationKind};
use adstudio_types::project::{Project, ProjectStatus};
use adstudio_types::support::Faq;
use adstudio_types::template::{Template, TemplateKind};
use chrono::{DateTime, Duration, NaiveDate, Utc};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Spring Coffee Launch".to_string(),
            status: ProjectStatus::Completed,
            thumbnail: "https://images.pexels.com/photos/302899/pexels-photo-302899.jpeg"
                .to_string(),
            last_modified: date(2024, 3, 10),
            scenes: 3,
            duration: "30s".to_string(),
        },
        Project {
            id: "2".to_string(),
            title: "Summer Collection Preview".to_string(),
            status: ProjectStatus::Generating,
            thumbnail: "https://images.pexels.com/photos/5709661/pexels-photo-5709661.jpeg"
                .to_string(),
            last_modified: date(2024, 3, 9),
            scenes: 4,
            duration: "45s".to_string(),
        },
    ]
}

pub fn seed_templates() -> Vec<Template> {
    vec![
        Template {
            id: "1".to_string(),
            title: "Modern Tech Product Launch".to_string(),
            description: "A sleek, minimalist approach to showcasing innovative technology \
                          products with emphasis on features and benefits."
                .to_string(),
            kind: TemplateKind::FullAd,
            industry: "Technology".to_string(),
            style: "Minimalist".to_string(),
            thumbnail: "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg"
                .to_string(),
            scenes: vec![
                Scene::new(
                    "Close-up shot of the product emerging from darkness, soft lighting reveals its sleek design",
                    "Introducing the future of technology, designed for the way you live.",
                ),
                Scene::new(
                    "Split screen showing multiple use cases, clean transitions between each scenario",
                    "Seamlessly integrate with your daily routine, whether at work or play.",
                ),
            ],
        },
        Template {
            id: "2".to_string(),
            title: "Energetic Fitness Campaign".to_string(),
            description: "Dynamic and motivational fitness ad template perfect for gym \
                          promotions and wellness products."
                .to_string(),
            kind: TemplateKind::FullAd,
            industry: "Fitness".to_string(),
            style: "Dynamic".to_string(),
            thumbnail: "https://images.pexels.com/photos/4498606/pexels-photo-4498606.jpeg"
                .to_string(),
            scenes: vec![
                Scene::new(
                    "Fast-paced montage of diverse people working out, high-energy movements",
                    "Transform your life, one workout at a time.",
                ),
                Scene::new(
                    "Inspiring before/after transitions, focus on genuine achievement",
                    "Real people, real results. Your journey begins here.",
                ),
            ],
        },
    ]
}

/// Bell-menu fixtures, timestamped relative to `now`.
pub fn seed_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            kind: NotificationKind::Video,
            message: "Your ad \"Summer Promo\" has finished generating!".to_string(),
            timestamp: now - Duration::minutes(2),
            read: false,
            link: Some("/my-projects".to_string()),
        },
        Notification {
            id: "2".to_string(),
            kind: NotificationKind::Template,
            message: "New \"Food & Beverage\" example added".to_string(),
            timestamp: now - Duration::hours(1),
            read: false,
            link: Some("/templates".to_string()),
        },
        Notification {
            id: "3".to_string(),
            kind: NotificationKind::Alert,
            message: "Your credits are low (15 remaining)".to_string(),
            timestamp: now - Duration::hours(2),
            read: true,
            link: Some("/billing".to_string()),
        },
        Notification {
            id: "4".to_string(),
            kind: NotificationKind::Billing,
            message: "Payment of $20 for 100 credits successful".to_string(),
            timestamp: now - Duration::days(1),
            read: true,
            link: None,
        },
    ]
}

/// Billing history, newest first.
pub fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".to_string(),
            date: date(2024, 3, 10),
            description: "Credit Purchase - 150 Credits".to_string(),
            amount_usd: 60,
            credits: 150,
            status: TransactionStatus::Completed,
        },
        Transaction {
            id: "2".to_string(),
            date: date(2024, 3, 5),
            description: "Project Generation - Spring Coffee Launch".to_string(),
            amount_usd: 0,
            credits: -5,
            status: TransactionStatus::Completed,
        },
    ]
}

pub fn seed_profile() -> Profile {
    Profile {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
    }
}

pub fn seed_faqs() -> Vec<Faq> {
    vec![
        Faq::new(
            "How do credits work?",
            "Credits are used to generate video ads. Each video generation costs a \
             specific number of credits depending on its length and complexity. You can \
             purchase credit packages from the billing page.",
        ),
        Faq::new(
            "What video formats are supported?",
            "We support all major video formats including MP4, MOV, and AVI. Videos can \
             be exported in various dimensions optimized for different social media \
             platforms.",
        ),
        Faq::new(
            "How can I improve my ad's quality?",
            "To improve your ad quality, provide detailed descriptions in your prompts, \
             use high-quality assets, and take advantage of our AI agent's suggestions. \
             You can also refer to our templates for inspiration.",
        ),
    ]
}
