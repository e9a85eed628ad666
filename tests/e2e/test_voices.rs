use crate::e2e::helpers;

use hanzimaster_tts::domain::tts::VoiceInfo;
use helpers::TestContext;
use hyper::StatusCode;
use std::collections::HashSet;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_all_voices(ctx: &TestContext) {
    let response = ctx.client.get("/voices").await.unwrap();

    response.assert_status(StatusCode::OK);

    let voices: Vec<VoiceInfo> = response.json().unwrap();
    assert_eq!(voices.len(), 7);

    let keys: HashSet<&str> = voices.iter().map(|v| v.key.as_str()).collect();
    assert_eq!(keys.len(), voices.len(), "voice keys must be unique");
    assert!(keys.contains("longxiaochun"), "default voice must be listed");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_complete_voice_profiles(ctx: &TestContext) {
    let response = ctx.client.get("/voices").await.unwrap();
    response.assert_status(StatusCode::OK);

    let voices: Vec<VoiceInfo> = response.json().unwrap();
    for voice in &voices {
        assert!(!voice.id.is_empty());
        assert!(!voice.name.is_empty());
        assert!(!voice.description.is_empty());
        assert!(voice.gender == "female" || voice.gender == "male");
        assert_eq!(voice.language, "zh");
    }

    let xiaochun = voices.iter().find(|v| v.key == "longxiaochun").unwrap();
    assert_eq!(xiaochun.id, "longxiaochun_v2");
    assert_eq!(xiaochun.name, "Xiaochun");
}
