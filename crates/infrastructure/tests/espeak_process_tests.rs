//! espeak-ng adapter against a scripted stand-in executable

#![cfg(target_os = "linux")]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

use application::{SpeechError, SpeechSynthesizer};
use domain::{Utterance, UtteranceConfig};
use infrastructure::{EspeakConfig, EspeakSynthesizer};
use tempfile::TempDir;

const PREAMBLE: &str = r#"#!/bin/sh
case "$1" in
  --version) echo "eSpeak NG text-to-speech: 1.51"; exit 0 ;;
  --voices)
    echo "Pty Language       Age/Gender VoiceName          File                 Other Languages"
    echo " 5  en-us           --/F      English_(America)  gmw/en-US            (en 3)"
    exit 0 ;;
esac
"#;

/// Write an executable that answers the probes and then runs `body`
fn stand_in(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("espeak-ng");
    fs::write(&path, format!("{PREAMBLE}{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Construct the synthesizer, retrying while a concurrent fork still holds
/// the freshly written script open for writing
fn synthesizer(executable: &Path) -> EspeakSynthesizer {
    for _ in 0..20 {
        let synth = EspeakSynthesizer::new(&EspeakConfig {
            executable: executable.to_path_buf(),
        });
        if synth.is_supported() {
            return synth;
        }
        thread::sleep(Duration::from_millis(50));
    }
    panic!("stand-in espeak-ng never became runnable");
}

fn wait_for_pid(path: &Path) -> u32 {
    for _ in 0..100 {
        if let Some(pid) = fs::read_to_string(path)
            .ok()
            .and_then(|content| content.trim().parse().ok())
        {
            return pid;
        }
        thread::sleep(Duration::from_millis(50));
    }
    panic!("stand-in espeak-ng never reported its pid");
}

fn is_alive(pid: u32) -> bool {
    Path::new(&format!("/proc/{pid}")).exists()
}

// ============================================================================
// Process lifecycle
// ============================================================================

#[test]
fn failed_write_leaves_no_process_behind() {
    let dir = TempDir::new().unwrap();
    let pid_file = dir.path().join("pid");
    let executable = stand_in(
        &dir,
        &format!(
            "echo $$ > '{}'\nexec 0<&-\nexec sleep 30",
            pid_file.display()
        ),
    );
    let synth = synthesizer(&executable);

    let text = "a".repeat(1024 * 1024);
    let result = synth.speak(&Utterance::new(text, UtteranceConfig::default()));
    assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));

    let pid = wait_for_pid(&pid_file);
    assert!(!is_alive(pid), "espeak-ng {pid} still running after failed write");

    assert!(synth.cancel().is_ok());
    assert!(synth.wait().is_ok());
}

#[test]
fn cancel_kills_running_utterance() {
    let dir = TempDir::new().unwrap();
    let pid_file = dir.path().join("pid");
    let executable = stand_in(
        &dir,
        &format!(
            "cat > /dev/null\necho $$ > '{}'\nexec sleep 30",
            pid_file.display()
        ),
    );
    let synth = synthesizer(&executable);

    synth
        .speak(&Utterance::new("Welcome to payroll.", UtteranceConfig::default()))
        .unwrap();
    let pid = wait_for_pid(&pid_file);
    assert!(is_alive(pid));

    synth.cancel().unwrap();
    assert!(!is_alive(pid));
}

// ============================================================================
// Voice list
// ============================================================================

#[test]
fn refresh_notifies_listeners() {
    let dir = TempDir::new().unwrap();
    let executable = stand_in(&dir, "exit 0");
    let synth = synthesizer(&executable);
    assert_eq!(synth.voices().len(), 1);

    let notified = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notified);
    synth.on_voices_changed(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    assert_eq!(synth.refresh_voices().unwrap(), 1);
    assert_eq!(notified.load(Ordering::SeqCst), 1);
    assert_eq!(synth.voices()[0].id, "en-us");
}
