// End-to-end integration tests for the HanziMaster TTS service.
//
// Each test spins up the full axum application on an ephemeral port with a
// stub synthesizer standing in for the external speech provider, so tests
// exercise the real routing, validation, payload building and error mapping
// without any network calls. Tests run in parallel; every test gets its own
// server instance.

mod test_health;
mod test_voices;
