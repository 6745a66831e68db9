//! Fixture content the site renders before any write traffic arrives.

use time::OffsetDateTime;

use crate::memory::Collections;
use crate::models::{Flag, NewPortfolioItem, NewService, NewTeamMember};

/// Seeded team member names, in insertion order.
pub const TEAM_MEMBER_NAMES: [&str; 3] = ["أحمد محمد", "سارة أحمد", "خالد عمر"];

const UNSPLASH_PARAMS: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}{UNSPLASH_PARAMS}")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn portfolio_items() -> Vec<NewPortfolioItem> {
    [
        ("حفل زفاف أنيق", "التصوير التقليدي", "photo-1519741497674-611481863552", "wedding"),
        ("جلسة بورتريه احترافية", "تصوير شخصي", "photo-1534528741775-53994a69daeb", "portrait"),
        ("فعالية شركات", "تصوير المؤتمرات", "photo-1511578314322-379afb476865", "event"),
        ("تصوير المنتجات", "تصوير تجاري", "photo-1523275335684-37898b6baf30", "commercial"),
    ]
    .into_iter()
    .map(|(title, description, photo, category)| NewPortfolioItem {
        title: title.to_string(),
        description: Some(description.to_string()),
        image_url: unsplash(photo),
        category: category.to_string(),
    })
    .collect()
}

fn team_members() -> Vec<NewTeamMember> {
    let details = [
        (
            "المصور الرئيسي",
            "مصور محترف بخبرة 10 سنوات في تصوير حفلات الزفاف والفعاليات الكبرى. حاصل على جوائز دولية في التصوير الفوتوغرافي.",
            "photo-1507003211169-0a1dd7228f2d",
            10,
        ),
        (
            "مصورة البورتريه",
            "متخصصة في التصوير الشخصي والعائلي بخبرة 8 سنوات. تتميز بأسلوبها الفني الذي يبرز جمال اللحظات الطبيعية والعفوية.",
            "photo-1438761681033-6461ffad8d80",
            8,
        ),
        (
            "مختص الفيديو",
            "خبير في إنتاج الفيديو والمونتاج السينمائي. يحول اللحظات إلى قصص مؤثرة باستخدام أحدث تقنيات التصوير والمعالجة.",
            "photo-1500648767791-00dcc994a43e",
            7,
        ),
    ];

    TEAM_MEMBER_NAMES
        .into_iter()
        .zip(details)
        .map(|(name, (role, description, photo, years))| NewTeamMember {
            name: name.to_string(),
            role: role.to_string(),
            description: description.to_string(),
            image_url: unsplash(photo),
            experience: Some(years),
            social_links: Some(strings(&["https://instagram.com", "https://twitter.com"])),
        })
        .collect()
}

fn services() -> Vec<NewService> {
    vec![
        NewService {
            name: "باقة حفلات الزفاف".to_string(),
            description: "تغطية كاملة ليوم زفافك بأعلى جودة مع ألبوم رقمي وطباعة فاخرة".to_string(),
            price: Some(5000),
            features: strings(&["8 ساعات تصوير", "+500 صورة معدلة", "ألبوم رقمي مخصص", "مصور + مساعد"]),
            is_popular: Some(Flag::False),
        },
        NewService {
            name: "باقة الفيديو الاحترافي".to_string(),
            description: "فيديو سينمائي احترافي يحكي قصتك بأسلوب فني مميز".to_string(),
            price: Some(7500),
            features: strings(&[
                "فيديو 10-15 دقيقة",
                "تصوير 4K Ultra HD",
                "مونتاج سينمائي",
                "موسيقى مرخصة",
                "طائرة درون",
            ]),
            is_popular: Some(Flag::True),
        },
        NewService {
            name: "باقة البورتريه".to_string(),
            description: "جلسة تصوير شخصية أو عائلية في الاستوديو أو الموقع المفضل لديك".to_string(),
            price: Some(1500),
            features: strings(&["ساعة تصوير", "25 صورة معدلة", "تعديل احترافي", "خلفيات متنوعة"]),
            is_popular: Some(Flag::False),
        },
    ]
}

/// Fills the collections with the site fixtures. Users and bookings stay empty.
pub(crate) fn populate(collections: &mut Collections) {
    let now = OffsetDateTime::now_utc();

    for item in portfolio_items() {
        let id = collections.portfolio_items.vacant_id();
        collections.portfolio_items.push(item.into_entity(id, now));
    }

    for member in team_members() {
        let id = collections.team_members.vacant_id();
        collections.team_members.push(member.into_entity(id));
    }

    for service in services() {
        let id = collections.services.vacant_id();
        collections.services.push(service.into_entity(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn fixtures_pass_payload_validation() {
        assert!(portfolio_items().iter().all(|item| item.validate().is_ok()));
        assert!(team_members().iter().all(|member| member.validate().is_ok()));
        assert!(services().iter().all(|service| service.validate().is_ok()));
    }

    #[test]
    fn gallery_categories_are_covered() {
        let categories: Vec<_> = portfolio_items().into_iter().map(|item| item.category).collect();
        assert_eq!(categories, ["wedding", "portrait", "event", "commercial"]);
    }
}
