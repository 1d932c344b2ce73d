use super::*;
use crate::influencer::FollowerCount;
use crate::roster::bundled_roster;

fn sample() -> Vec<Influencer> {
    bundled_roster().expect("bundled roster should parse")
}

fn names(influencers: &[Influencer]) -> Vec<&str> {
    influencers.iter().map(|i| i.name.as_str()).collect()
}

fn bare(id: i64, name: &str) -> Influencer {
    Influencer {
        id,
        name: name.to_string(),
        username: None,
        profile_image: None,
        followers: FollowerCount::Label("900K".to_string()),
        hearts: None,
        videos: None,
        engagement_rate: None,
        niche: None,
        platform: "instagram".to_string(),
        location: None,
        email: None,
        lead_stage: None,
        contract_video: None,
        created_at: None,
        contract_shares: None,
        contract_plays: None,
        contract_comments: None,
    }
}

#[test]
fn empty_filter_returns_input_unchanged() {
    let roster = sample();
    let filter = InfluencerFilter::default();
    assert!(filter.is_empty());
    assert_eq!(filter_influencers(&roster, &filter), roster);
}

#[test]
fn platform_instagram_yields_three_entries() {
    let filter = InfluencerFilter {
        platform: PlatformFilter::from(Platform::Instagram),
        ..InfluencerFilter::default()
    };
    let result = filter_influencers(&sample(), &filter);
    assert_eq!(
        names(&result),
        ["Sarah Johnson", "Maria Rodriguez", "Priya Patel"]
    );
}

#[test]
fn location_new_york_yields_priya_patel() {
    let filter = InfluencerFilter {
        location: "New York".to_string(),
        ..InfluencerFilter::default()
    };
    let result = filter_influencers(&sample(), &filter);
    assert_eq!(names(&result), ["Priya Patel"]);
}

#[test]
fn location_match_is_case_insensitive() {
    let filter = InfluencerFilter {
        location: ", ca".to_string(),
        ..InfluencerFilter::default()
    };
    let result = filter_influencers(&sample(), &filter);
    assert_eq!(names(&result), ["Sarah Johnson", "Alex Chen"]);
}

#[test]
fn term_matches_name_username_or_niche() {
    let roster = sample();

    let by_name = filter_influencers(&roster, &InfluencerFilter::with_term("alex"));
    assert_eq!(names(&by_name), ["Alex Chen"]);

    let by_username = filter_influencers(&roster, &InfluencerFilter::with_term("@MARIAFIT"));
    assert_eq!(names(&by_username), ["Maria Rodriguez"]);

    let by_niche = filter_influencers(&roster, &InfluencerFilter::with_term("gaming"));
    assert_eq!(names(&by_niche), ["David Kim"]);
}

#[test]
fn term_does_not_search_location() {
    let result = filter_influencers(&sample(), &InfluencerFilter::with_term("Seattle"));
    assert!(result.is_empty());
}

#[test]
fn min_followers_compares_in_thousands() {
    let filter = InfluencerFilter {
        min_followers_k: Some(900.0),
        ..InfluencerFilter::default()
    };
    let result = filter_influencers(&sample(), &filter);
    assert_eq!(
        names(&result),
        ["Sarah Johnson", "Maria Rodriguez", "David Kim"]
    );
}

#[test]
fn min_followers_threshold_is_inclusive() {
    let filter = InfluencerFilter {
        min_followers_k: Some(850.0),
        ..InfluencerFilter::default()
    };
    let result = filter_influencers(&sample(), &filter);
    assert!(names(&result).contains(&"Alex Chen"));
}

#[test]
fn engagement_of_three_point_eight_passes_three_but_not_four() {
    let roster = sample();
    let sarah = &roster[0];
    assert_eq!(sarah.engagement_percent(), Some(3.8));

    let three = InfluencerFilter {
        min_engagement: Some(3.0),
        ..InfluencerFilter::default()
    };
    let four = InfluencerFilter {
        min_engagement: Some(4.0),
        ..InfluencerFilter::default()
    };
    assert!(three.matches(sarah));
    assert!(!four.matches(sarah));
}

#[test]
fn constraints_combine_with_and() {
    let filter = InfluencerFilter {
        term: String::new(),
        platform: PlatformFilter::from(Platform::Youtube),
        min_followers_k: Some(800.0),
        min_engagement: Some(4.0),
        location: String::new(),
    };
    let result = filter_influencers(&sample(), &filter);
    assert_eq!(names(&result), ["Alex Chen"]);
}

#[test]
fn filtering_is_idempotent() {
    let filters = [
        InfluencerFilter::with_term("a"),
        InfluencerFilter {
            platform: PlatformFilter::from(Platform::Instagram),
            min_engagement: Some(4.5),
            ..InfluencerFilter::default()
        },
        InfluencerFilter {
            min_followers_k: Some(700.0),
            location: "il".to_string(),
            ..InfluencerFilter::default()
        },
    ];
    let roster = sample();
    for filter in &filters {
        let once = filter_influencers(&roster, filter);
        let twice = filter_influencers(&once, filter);
        assert_eq!(once, twice, "filter {filter:?} should be idempotent");
    }
}

#[test]
fn missing_fields_fail_only_active_constraints() {
    let candidate = bare(99, "Nameless Niche");

    assert!(InfluencerFilter::default().matches(&candidate));

    let engagement = InfluencerFilter {
        min_engagement: Some(0.0),
        ..InfluencerFilter::default()
    };
    assert!(!engagement.matches(&candidate));

    let location = InfluencerFilter {
        location: "anywhere".to_string(),
        ..InfluencerFilter::default()
    };
    assert!(!location.matches(&candidate));

    // Missing username/niche do not stop the name from matching.
    assert!(InfluencerFilter::with_term("nameless").matches(&candidate));
    assert!(!InfluencerFilter::with_term("beauty").matches(&candidate));
}

#[test]
fn unparseable_followers_fail_active_follower_constraint() {
    let mut candidate = bare(7, "Mystery");
    candidate.followers = FollowerCount::Label("n/a".to_string());
    let filter = InfluencerFilter {
        min_followers_k: Some(0.0),
        ..InfluencerFilter::default()
    };
    assert!(!filter.matches(&candidate));
}

#[test]
fn platform_only_compares_exact_name() {
    let mut candidate = bare(8, "Tok Star");
    candidate.platform = "tiktok".to_string();
    let filter = InfluencerFilter {
        platform: PlatformFilter::Only("tiktok".to_string()),
        ..InfluencerFilter::default()
    };
    assert!(filter.matches(&candidate));
    assert!(!filter.matches(&bare(9, "Gram Star")));
}

#[test]
fn platform_filter_parses_all_and_known_platforms() {
    assert_eq!("all".parse::<PlatformFilter>(), Ok(PlatformFilter::All));
    assert_eq!(
        "youtube".parse::<PlatformFilter>(),
        Ok(PlatformFilter::Only("youtube".to_string()))
    );
    assert!("vine".parse::<PlatformFilter>().is_err());
}
