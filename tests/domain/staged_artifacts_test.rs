use std::path::Path;

use scribe::domain::{ChatId, JobId, StagedArtifacts};

#[test]
fn given_job_when_staging_then_all_paths_share_job_base_name() {
    let job_id = JobId::new();
    let artifacts = StagedArtifacts::new(Path::new("/data"), ChatId::new(42), job_id);
    let base = job_id.base_name();

    assert_eq!(artifacts.job_dir(), Path::new("/data/texts/42"));
    assert_eq!(artifacts.raw_source(), Path::new("/data/texts/42").join(&base));
    assert_eq!(
        artifacts.normalized_audio(),
        Path::new("/data/texts/42").join(format!("{}.wav", base))
    );
    assert_eq!(
        artifacts.structured_output(),
        Path::new("/data/texts/42").join(format!("{}.json", base))
    );
    assert_eq!(
        artifacts.transcript(),
        Path::new("/data/texts/42").join(format!("{}.txt", base))
    );
    assert_eq!(artifacts.transcript_file_name(), format!("{}.txt", base));
}

#[test]
fn given_two_jobs_in_same_chat_when_staging_then_paths_never_collide() {
    let root = Path::new("/data");
    let a = StagedArtifacts::new(root, ChatId::new(1), JobId::new());
    let b = StagedArtifacts::new(root, ChatId::new(1), JobId::new());

    assert_eq!(a.job_dir(), b.job_dir());
    assert_ne!(a.raw_source(), b.raw_source());
    assert_ne!(a.transcript(), b.transcript());
}

#[test]
fn given_staged_artifacts_when_listing_intermediates_then_transcript_is_excluded() {
    let artifacts = StagedArtifacts::new(Path::new("/data"), ChatId::new(7), JobId::new());
    let intermediates = artifacts.intermediates();

    assert_eq!(intermediates.len(), 3);
    assert!(!intermediates.contains(&artifacts.transcript()));
}

#[test]
fn given_issued_transcript_name_when_resolving_then_path_is_in_chat_dir() {
    let artifacts = StagedArtifacts::new(Path::new("/data"), ChatId::new(9), JobId::new());
    let resolved = StagedArtifacts::resolve_transcript(
        Path::new("/data"),
        ChatId::new(9),
        &artifacts.transcript_file_name(),
    );

    assert_eq!(resolved.as_deref(), Some(artifacts.transcript()));
}

#[test]
fn given_traversal_or_foreign_names_when_resolving_then_none_is_returned() {
    let root = Path::new("/data");
    let chat = ChatId::new(9);

    assert!(StagedArtifacts::resolve_transcript(root, chat, "../secret.txt").is_none());
    assert!(StagedArtifacts::resolve_transcript(root, chat, "a/b.txt").is_none());
    assert!(StagedArtifacts::resolve_transcript(root, chat, "abc.json").is_none());
    assert!(StagedArtifacts::resolve_transcript(root, chat, ".txt").is_none());
    assert!(StagedArtifacts::resolve_transcript(root, chat, "abc").is_none());
}
