//! End-to-end scenarios
//!
//! Drive the app shell the way a user would: sign in, earn points across
//! screens, try to redeem, change the theme and sign out.

use app_core::actions::EcoActionBoard;
use app_core::auth::{ForgotPassword, LoginForm, ResetState};
use app_core::learning::{open_module, InteractiveQuiz, ModuleReader};
use app_core::media::PhotoSource;
use app_core::missions::{resolve_mission, NextStep};
use app_core::news::LockScreen;
use app_core::quiz::QuizSession;
use app_core::rewards::{RedeemError, RedemptionLedger};
use app_core::catalog::DAILY_QUIZ_ID;
use app_core::{ContentCatalog, Timings};
use app_ui::navigation::{NavigationTab, Route};
use ecostep::{AppConfig, EcoStepApp};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn instant_app() -> EcoStepApp {
    let config = AppConfig {
        timings: Timings::instant(),
        ..AppConfig::default()
    };
    EcoStepApp::new(config).unwrap()
}

/// Catalog override whose first reward costs 1300 points
fn expensive_catalog(dir: &TempDir) -> std::path::PathBuf {
    let mut catalog = ContentCatalog::builtin();
    catalog.rewards[0].points = 1300;
    catalog.rewards[0].available = true;
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();
    path
}

/// Earn 15 points then fail to redeem a 1300-point reward
#[tokio::test]
async fn test_earn_then_redeem_rejected() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        timings: Timings::instant(),
        catalog_path: Some(expensive_catalog(&dir)),
        ..AppConfig::default()
    };
    let mut app = EcoStepApp::new(config).unwrap();
    assert_eq!(app.store().eco_points(), 1250);

    // Mission 1 is worth 15 points
    app.navigate(Route::ActionVerification { mission: Some(1) });
    let mission = resolve_mission(app.catalog(), Some(1)).unwrap().clone();
    let completion = app
        .missions()
        .verify_and_complete(&mission, PhotoSource::Camera)
        .await
        .unwrap();
    assert_eq!(completion.balance, 1265);
    assert!(completion.evidence.is_some());

    let mut ledger = RedemptionLedger::new(app.store().clone());
    let reward_id = app.catalog().rewards[0].id;
    let err = ledger.redeem_by_id(app.catalog(), reward_id).unwrap_err();
    assert_eq!(
        err,
        RedeemError::InsufficientPoints {
            cost: 1300,
            balance: 1265,
            shortfall: 35
        }
    );
    assert_eq!(err.to_string(), "You need 35 more points to redeem this reward.");
    assert_eq!(app.store().eco_points(), 1265);
    assert!(ledger.is_empty());

    assert_eq!(app.continue_after_mission(NextStep::NextMission), Route::MissionCatalog);
}

/// Balance equals the start plus every award, whichever screen paid it
#[tokio::test]
async fn test_points_accumulate_across_screens() {
    let app = instant_app();
    let catalog = app.catalog();
    let store = app.store();

    let lock = LockScreen::new(catalog, store.clone());
    lock.press_card(1).unwrap();

    let mut board = EcoActionBoard::new(catalog, store.clone());
    let first_action = catalog.action_categories[0].actions[0].clone();
    board.complete(first_action.id).unwrap();

    let mut reader = ModuleReader::new(catalog.module(1).unwrap().clone());
    reader.complete(store).unwrap();

    let module = catalog.module(2).unwrap();
    let mut interactive =
        InteractiveQuiz::for_module(catalog, module, app.config().interactive_quiz_points).unwrap();
    interactive.select_answer(1).unwrap();
    interactive.answer(store, &app.config().timings).await.unwrap();

    let expected = 1250
        + catalog.news_item(1).unwrap().points
        + first_action.points
        + catalog.module(1).unwrap().points
        + 15;
    assert_eq!(store.eco_points(), expected);
}

/// A perfect daily quiz earns three stars and 30 points
#[tokio::test]
async fn test_daily_quiz_perfect_run() {
    let mut app = instant_app();
    app.navigate(Route::Quiz { quiz: None });

    let quiz = app.catalog().quiz(DAILY_QUIZ_ID).unwrap().clone();
    let mut session = QuizSession::new(quiz.clone()).unwrap();
    let mut outcome = None;
    for question in &quiz.questions {
        session.select_answer(question.correct).unwrap();
        outcome = session
            .submit_and_continue(app.store(), &app.config().timings)
            .await
            .unwrap();
    }

    let outcome = outcome.unwrap();
    assert_eq!(outcome.tier.stars, 3);
    assert_eq!(app.store().eco_points(), 1280);
    assert!(app.go_back());
    assert_eq!(app.current_route(), Route::EcoLockScreen);
}

/// Profile needs a user; after login it opens and logout clears the session
#[tokio::test]
async fn test_login_profile_logout() {
    let mut app = instant_app();
    assert_eq!(app.navigate(Route::Profile), Route::Login);

    let user = app
        .auth()
        .login(&LoginForm::new("greta@eco.org", "secret1"))
        .await
        .unwrap();
    assert_eq!(user.name, "greta");
    app.finish_sign_in();
    assert_eq!(app.current_route(), Route::Home);

    assert_eq!(app.navigate(Route::Profile), Route::Profile);
    app.logout();
    assert!(app.store().user().is_none());
    assert_eq!(app.store().eco_points(), 0);
    assert_eq!(app.current_route(), Route::Home);
}

/// Forgot password returns to Login once the email is sent
#[tokio::test]
async fn test_forgot_password_returns_to_login() {
    let mut app = instant_app();
    app.navigate(Route::Login);
    app.navigate(Route::ForgotPassword);

    let mut screen = ForgotPassword::new();
    screen.set_email("greta@eco.org");
    screen.send(&app.config().timings).await.unwrap();
    assert_eq!(screen.state(), ResetState::Sent);

    app.finish_password_reset();
    assert_eq!(app.current_route(), Route::Login);
}

/// Two toggles bring the theme back
#[test]
fn test_theme_toggle_twice() {
    let app = instant_app();
    assert!(app.theme().is_dark());
    assert!(!app.store().toggle_theme());
    assert!(!app.theme().is_dark());
    assert!(app.store().toggle_theme());
    assert!(app.theme().is_dark());
}

/// Config files override defaults and keep the rest
#[test]
fn test_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"initialEcoPoints": 500, "darkMode": false}}"#).unwrap();

    let app = EcoStepApp::from_config_file(file.path()).unwrap();
    assert_eq!(app.store().eco_points(), 500);
    assert!(!app.theme().is_dark());
    assert_eq!(app.config().news_share_points, 3);
}

/// A broken config file reports where it came from
#[test]
fn test_invalid_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = EcoStepApp::from_config_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid config file"));
}

/// Deep links and module routing land on the right screens
#[test]
fn test_deep_links_and_module_routes() {
    let mut app = instant_app();
    assert_eq!(
        app.open_path("/missions/3/verify"),
        Route::ActionVerification { mission: Some(3) }
    );

    let module = app.catalog().module(2).unwrap().clone();
    assert_eq!(
        app.open_module(open_module(&module)),
        Route::InteractiveQuiz { module: Some(2) }
    );

    app.switch_tab(NavigationTab::Community);
    assert_eq!(app.current_route(), Route::Community);
}
