//! Integration test: store a practice in an on-disk database, reopen it and
//! resolve it for a logged-in viewer.

use practice_core::config::PracticeConfig;
use practice_core::display::DisplayMode;
use practice_core::practice_db::{NewPractice, PracticeDb};
use practice_core::resolver::{resolve_url, UrlParameter};
use practice_core::score::ScoreBand;
use practice_core::variables::{CourseInfo, ModuleInfo, RenderEnvironment, SiteInfo, UserInfo, VariableContext};
use practice_core::view::{plan_view, ViewPlan, ViewRequest};
use tempfile::tempdir;

fn environment() -> RenderEnvironment {
    RenderEnvironment {
        course: CourseInfo {
            id: 4,
            full_name: "Chemistry 1".to_string(),
            short_name: "CHEM1".to_string(),
            ..CourseInfo::default()
        },
        module: ModuleInfo {
            cmid: 31,
            id_number: String::new(),
        },
        site: SiteInfo {
            full_name: "Example LMS".to_string(),
            root: "http://lms.example.edu".to_string(),
        },
        user: Some(UserInfo {
            id: 9,
            username: "mcurie".to_string(),
            first_name: "Marie".to_string(),
            last_name: "Curie".to_string(),
            ..UserInfo::default()
        }),
        lang: "en".to_string(),
        now: 1_700_000_000,
        remote_addr: "127.0.0.1".to_string(),
        roles: Vec::new(),
    }
}

#[tokio::test]
async fn stored_practice_resolves_with_user_parameters() {
    let state_dir = tempdir().unwrap();
    let db_path = state_dir.path().join("nested").join("practice.db");
    let config = PracticeConfig {
        site_root: "http://lms.example.edu".to_string(),
        ..PracticeConfig::default()
    };

    let mut form = NewPractice::with_defaults(4, "Titration", "sim.example.com/titration", &config.defaults);
    form.display = DisplayMode::Open;
    form.parameters = vec![
        UrlParameter::new("student", "userfullname"),
        UrlParameter::new("code", "encryptedcode"),
        UrlParameter::new("course", "courseshortname"),
    ];

    let id = {
        let db = PracticeDb::open_at(&db_path).await.unwrap();
        db.add_practice(&form).await.unwrap()
    };

    let db = PracticeDb::open_at(&db_path).await.unwrap();
    let def = db.require_practice(id).await.unwrap();
    assert_eq!(def.external_url, "http://sim.example.com/titration");

    let ctx = VariableContext::build(&environment(), &def, &config);
    let resolved = resolve_url(&def, &ctx, config.site_root());
    assert_eq!(resolved.display, DisplayMode::Open);
    // No secret phrase configured, so `code` is dropped.
    assert_eq!(
        resolved.url,
        "http://sim.example.com/titration?student=Marie%20Curie&amp;course=CHEM1"
    );

    let plan = plan_view(
        &def,
        &ctx,
        &config,
        ViewRequest {
            cmid: 31,
            ..ViewRequest::default()
        },
    );
    assert_eq!(
        plan,
        ViewPlan::Redirect {
            url: "http://sim.example.com/titration?student=Marie%20Curie&course=CHEM1".to_string()
        }
    );

    db.record_score("mcurie", id, 96.0).await.unwrap();
    let record = db.get_score("mcurie", id).await.unwrap().expect("score recorded");
    assert_eq!(ScoreBand::from_score(record.score), ScoreBand::VeryGood);
}
