// src/seed/static_data.rs
//
// Built-in sample catalog.
// Ids are UUID v5 so the same catalog is produced on every start.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::SeedProvider;
use crate::domain::{Chapter, Gender, PublicationStatus, Title, Weekday};
use crate::error::AppResult;

/// Chapters newer than this many from the end start out unread
const UNREAD_TAIL: u32 = 3;

struct SeedTitle {
    title: &'static str,
    cover_image: &'static str,
    description: &'static str,
    author: &'static str,
    illustrator: &'static str,
    country: &'static str,
    gender: Gender,
    categories: &'static [&'static str],
    release_day: Weekday,
    release_year: i32,
    publication_status: PublicationStatus,
    chapter_count: u32,
    read_base_url: &'static str,
    official_url: &'static str,
    has_new_chapter: bool,
    next_chapter_in_hours: i64,
}

const CATALOG: &[SeedTitle] = &[
    SeedTitle {
        title: "Solo Leveling",
        cover_image: "https://cdn.pixabay.com/photo/2023/04/13/11/41/ai-generated-7922768_1280.jpg",
        description: "When a portal connecting our world to a different dimension full of monsters appears, some people gain powers to hunt these monsters. Sung Jin-Woo, the weakest of all hunters, gets a strange power and embarks on a journey to become the strongest hunter.",
        author: "Chugong",
        illustrator: "Jang Sung-rak",
        country: "South Korea",
        gender: Gender::Straight,
        categories: &["Action", "Adventure", "Fantasy"],
        release_day: Weekday::Wednesday,
        release_year: 2018,
        publication_status: PublicationStatus::Completed,
        chapter_count: 178,
        read_base_url: "https://xbato.com/v3x/solo-leveling",
        official_url: "https://m.webtoons.com/en/action/solo-leveling/list?title_no=3162",
        has_new_chapter: true,
        next_chapter_in_hours: 48,
    },
    SeedTitle {
        title: "The Beginning After The End",
        cover_image: "https://cdn.pixabay.com/photo/2023/07/04/10/10/ai-generated-8105960_1280.jpg",
        description: "King Grey has unrivaled strength, wealth, and prestige in a world governed by martial ability. However, solitude lingers closely behind those with great power.",
        author: "TurtleMe",
        illustrator: "Fuyuki23",
        country: "South Korea",
        gender: Gender::Straight,
        categories: &["Action", "Adventure", "Fantasy", "Reincarnation"],
        release_day: Weekday::Friday,
        release_year: 2018,
        publication_status: PublicationStatus::Ongoing,
        chapter_count: 160,
        read_base_url: "https://xbato.com/v3x/the-beginning-after-the-end",
        official_url: "https://tapas.io/series/TBATE",
        has_new_chapter: false,
        next_chapter_in_hours: 96,
    },
    SeedTitle {
        title: "Omniscient Reader's Viewpoint",
        cover_image: "https://cdn.pixabay.com/photo/2023/06/29/10/33/ai-generated-8096034_1280.jpg",
        description: "Only I know the end of this world. One day our MC finds himself stuck in the world of his favorite webnovel.",
        author: "Sing-Shong",
        illustrator: "REDICE Studio",
        country: "South Korea",
        gender: Gender::Straight,
        categories: &["Action", "Adventure", "Fantasy", "Post-Apocalyptic"],
        release_day: Weekday::Monday,
        release_year: 2020,
        publication_status: PublicationStatus::Ongoing,
        chapter_count: 150,
        read_base_url: "https://xbato.com/v3x/omniscient-readers-viewpoint",
        official_url: "https://m.webtoons.com/en/action/omniscient-reader/list?title_no=2154",
        has_new_chapter: true,
        next_chapter_in_hours: 144,
    },
    SeedTitle {
        title: "Tower of God",
        cover_image: "https://cdn.pixabay.com/photo/2023/07/05/18/13/ai-generated-8108870_1280.jpg",
        description: "What do you desire? Money and wealth? Honor and pride? Authority and power? Revenge? Or something that transcends them all?",
        author: "SIU",
        illustrator: "SIU",
        country: "South Korea",
        gender: Gender::Straight,
        categories: &["Action", "Adventure", "Fantasy", "Mystery"],
        release_day: Weekday::Sunday,
        release_year: 2010,
        publication_status: PublicationStatus::Ongoing,
        chapter_count: 550,
        read_base_url: "https://xbato.com/v3x/tower-of-god",
        official_url: "https://m.webtoons.com/en/fantasy/tower-of-god/list?title_no=95",
        has_new_chapter: false,
        next_chapter_in_hours: 120,
    },
    SeedTitle {
        title: "Heartstopper",
        cover_image: "https://cdn.pixabay.com/photo/2023/06/23/10/44/ai-generated-8083508_1280.jpg",
        description: "Charlie, a highly-strung, openly gay over-thinker, and Nick, a cheerful, soft-hearted rugby player, meet at a British all-boys grammar school.",
        author: "Alice Oseman",
        illustrator: "Alice Oseman",
        country: "United Kingdom",
        gender: Gender::Yaoi,
        categories: &["Romance", "Drama", "Slice of Life", "School Life"],
        release_day: Weekday::Tuesday,
        release_year: 2016,
        publication_status: PublicationStatus::Ongoing,
        chapter_count: 120,
        read_base_url: "https://yaoiscan.com/heartstopper",
        official_url: "https://www.webtoons.com/en/romance/heartstopper/list?title_no=1181",
        has_new_chapter: true,
        next_chapter_in_hours: 24,
    },
    SeedTitle {
        title: "Bloom Into You",
        cover_image: "https://cdn.pixabay.com/photo/2023/09/14/15/48/ai-generated-8253091_1280.jpg",
        description: "Yuu has always loved shoujo manga and awaits the day she gets a love confession that sends her heart aflutter.",
        author: "Nio Nakatani",
        illustrator: "Nio Nakatani",
        country: "Japan",
        gender: Gender::Yuri,
        categories: &["Romance", "Drama", "School Life"],
        release_day: Weekday::Thursday,
        release_year: 2015,
        publication_status: PublicationStatus::Completed,
        chapter_count: 75,
        read_base_url: "https://vyvymanga.net/bloom-into-you",
        official_url: "https://flowermanga.net/bloom-into-you",
        has_new_chapter: false,
        next_chapter_in_hours: 72,
    },
    SeedTitle {
        title: "The God of High School",
        cover_image: "https://cdn.pixabay.com/photo/2023/09/10/18/26/ai-generated-8245382_1280.jpg",
        description: "It all began as a fighting tournament to seek out the best fighter among all high school students in Korea.",
        author: "Yongje Park",
        illustrator: "Yongje Park",
        country: "South Korea",
        gender: Gender::Straight,
        categories: &["Action", "Adventure", "Supernatural", "Martial Arts"],
        release_day: Weekday::Saturday,
        release_year: 2011,
        publication_status: PublicationStatus::Ongoing,
        chapter_count: 530,
        read_base_url: "https://xbato.com/v3x/the-god-of-high-school",
        official_url: "https://m.webtoons.com/en/action/the-god-of-high-school/list?title_no=66",
        has_new_chapter: true,
        next_chapter_in_hours: 12,
    },
    SeedTitle {
        title: "Love for Sale",
        cover_image: "https://cdn.pixabay.com/photo/2023/09/25/19/58/ai-generated-8275350_1280.jpg",
        description: "A heart-warming BL story about finding love in unexpected places.",
        author: "Deadbeats",
        illustrator: "Gavin Lin",
        country: "China",
        gender: Gender::Yaoi,
        categories: &["Romance", "Drama", "Modern"],
        release_day: Weekday::Wednesday,
        release_year: 2021,
        publication_status: PublicationStatus::Ongoing,
        chapter_count: 92,
        read_base_url: "https://portalyaoi.com/love-for-sale",
        official_url: "https://weebrook.com/love-for-sale",
        has_new_chapter: false,
        next_chapter_in_hours: 168,
    },
];

/// The built-in sample catalog, dated relative to `now`
#[derive(Debug, Clone, Copy)]
pub struct StaticSeedProvider {
    now: DateTime<Utc>,
}

impl StaticSeedProvider {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl SeedProvider for StaticSeedProvider {
    fn load(&self) -> AppResult<Vec<Title>> {
        Ok(CATALOG.iter().map(|seed| build_title(seed, self.now)).collect())
    }
}

fn build_title(seed: &SeedTitle, now: DateTime<Utc>) -> Title {
    let mut title = Title::new(
        seed.title.to_string(),
        seed.author.to_string(),
        seed.gender,
        seed.release_day,
    );
    title.id = Uuid::new_v5(&Uuid::NAMESPACE_URL, seed.official_url.as_bytes());
    title.illustrator = seed.illustrator.to_string();
    title.description = seed.description.to_string();
    title.cover_image = seed.cover_image.to_string();
    title.official_url = Some(seed.official_url.to_string());
    title.country = seed.country.to_string();
    title.categories = seed.categories.iter().map(|c| c.to_string()).collect();
    title.release_year = Some(seed.release_year);
    title.publication_status = seed.publication_status;
    title.has_new_chapter = seed.has_new_chapter;
    title.next_chapter_date = Some(now + Duration::hours(seed.next_chapter_in_hours));
    title.chapters = weekly_chapters(title.id, seed.chapter_count, seed.read_base_url, now);
    title
}

/// One chapter per week, newest released `now`, newest first.
/// Everything but the newest few chapters starts out read.
fn weekly_chapters(title_id: Uuid, count: u32, base_url: &str, now: DateTime<Utc>) -> Vec<Chapter> {
    (1..=count)
        .rev()
        .map(|number| {
            let weeks_ago = i64::from(count - number);
            let mut chapter = Chapter::new(
                number,
                format!("Chapter {}", number),
                now - Duration::weeks(weeks_ago),
            );
            chapter.id = Uuid::new_v5(&title_id, format!("chapter-{}", number).as_bytes());
            chapter.is_read = number + UNREAD_TAIL < count;
            chapter.read_url = Some(format!("{}/chapter-{}", base_url, number));
            chapter
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate_title;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_seed_is_valid_and_unique() {
        let titles = StaticSeedProvider::new(now()).load().unwrap();
        assert_eq!(titles.len(), CATALOG.len());

        let ids: HashSet<Uuid> = titles.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), titles.len());
        for title in &titles {
            assert!(validate_title(title).is_ok(), "{} is invalid", title.title);
        }
    }

    #[test]
    fn test_seed_is_deterministic() {
        let a = StaticSeedProvider::new(now()).load().unwrap();
        let b = StaticSeedProvider::new(now()).load().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_newest_chapters_start_unread() {
        let titles = StaticSeedProvider::new(now()).load().unwrap();
        let solo = &titles[0];
        assert_eq!(solo.chapter_count(), 178);
        // chapters 175..=178 are unread
        assert_eq!(solo.read_count(), 174);

        let newest = solo.latest_chapter().unwrap();
        assert_eq!(newest.number, 178);
        assert_eq!(newest.release_date, now());
        assert!(!newest.is_read);
    }
}
