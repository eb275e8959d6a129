mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{png_uri, FakeNativeShare, FakeUploader, RecordingClipboard, PNG_BYTES};
use urban_jungle_lib::share::{ShareExporter, ShareOutcome, SharePlatform, ShareStatus, Sharer};

const RESET_DELAY: Duration = Duration::from_secs(3);

struct Harness {
    exporter: ShareExporter,
    clipboard: Arc<RecordingClipboard>,
    uploader: Arc<FakeUploader>,
    native: Option<Arc<FakeNativeShare>>,
}

fn harness(
    native: Option<FakeNativeShare>,
    uploader: FakeUploader,
    clipboard: RecordingClipboard,
) -> Harness {
    let clipboard = Arc::new(clipboard);
    let uploader = Arc::new(uploader);
    let native = native.map(Arc::new);

    let mut platform = SharePlatform::new(clipboard.clone(), uploader.clone());
    if let Some(native) = &native {
        platform = platform.with_native_share(native.clone());
    }

    Harness {
        exporter: ShareExporter::new(platform, ShareStatus::new(), RESET_DELAY),
        clipboard,
        uploader,
        native,
    }
}

#[tokio::test(start_paused = true)]
async fn native_share_wins_and_touches_nothing_else() {
    let h = harness(
        Some(FakeNativeShare::accepting()),
        FakeUploader::returning(Some("https://file.io/abc")),
        RecordingClipboard::default(),
    );

    let outcome = h.exporter.share(&png_uri(), "Moss").await;

    assert_eq!(outcome, Some(ShareOutcome::Success));
    assert_eq!(h.uploader.call_count(), 0);
    assert_eq!(h.clipboard.writes(), 0);

    let native = h.native.as_ref().unwrap();
    let shared = native.shared.lock().unwrap();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].title, "Urban Jungle Typer");
    assert_eq!(
        shared[0].text,
        "Check out my \"Moss\" design created with Urban Jungle Typer!"
    );
    assert_eq!(shared[0].files.len(), 1);
    assert!(shared[0].files[0].name.starts_with("urban-jungle-"));
    assert!(shared[0].files[0].name.ends_with(".png"));
    assert_eq!(shared[0].files[0].mime_type, "image/png");
    assert_eq!(shared[0].files[0].bytes, PNG_BYTES);
    drop(shared);

    // Native success does not auto-revert.
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(h.exporter.status().get(), ShareOutcome::Success);
}

#[tokio::test(start_paused = true)]
async fn uploaded_link_is_copied_then_status_reverts() {
    let h = harness(
        None,
        FakeUploader::returning(Some("https://file.io/abc")),
        RecordingClipboard::default(),
    );

    let outcome = h.exporter.share(&png_uri(), "Moss").await;

    assert_eq!(outcome, Some(ShareOutcome::Success));
    assert_eq!(h.uploader.call_count(), 1);
    assert_eq!(
        *h.clipboard.texts.lock().unwrap(),
        vec!["https://file.io/abc".to_string()]
    );
    assert!(h.clipboard.images.lock().unwrap().is_empty());
    assert_eq!(h.exporter.status().get(), ShareOutcome::Success);

    tokio::time::sleep(Duration::from_millis(2_900)).await;
    assert_eq!(h.exporter.status().get(), ShareOutcome::Success);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(h.exporter.status().get(), ShareOutcome::Idle);
}

#[tokio::test(start_paused = true)]
async fn missing_link_falls_back_to_image_on_clipboard() {
    let h = harness(
        Some(FakeNativeShare::rejecting()),
        FakeUploader::returning(None),
        RecordingClipboard::default(),
    );

    let outcome = h.exporter.share(&png_uri(), "Moss").await;

    assert_eq!(outcome, Some(ShareOutcome::Success));
    assert_eq!(h.uploader.call_count(), 1);
    assert!(h.clipboard.texts.lock().unwrap().is_empty());

    let images = h.clipboard.images.lock().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].bytes, PNG_BYTES);
    drop(images);

    assert_eq!(h.native.as_ref().unwrap().share_count(), 0);

    tokio::time::sleep(Duration::from_millis(3_100)).await;
    assert_eq!(h.exporter.status().get(), ShareOutcome::Idle);
}

#[tokio::test]
async fn clipboard_failure_is_an_error_and_releases_the_guard() {
    let h = harness(
        None,
        FakeUploader::returning(None),
        RecordingClipboard::failing(),
    );

    let outcome = h.exporter.share(&png_uri(), "Moss").await;

    assert_eq!(outcome, Some(ShareOutcome::Error));
    assert_eq!(h.exporter.status().get(), ShareOutcome::Error);
    assert!(!h.exporter.is_sharing());
}

#[tokio::test]
async fn native_failure_does_not_fall_back() {
    let h = harness(
        Some(FakeNativeShare::failing()),
        FakeUploader::returning(Some("https://file.io/abc")),
        RecordingClipboard::default(),
    );

    let outcome = h.exporter.share(&png_uri(), "Moss").await;

    assert_eq!(outcome, Some(ShareOutcome::Error));
    assert_eq!(h.uploader.call_count(), 0);
    assert_eq!(h.clipboard.writes(), 0);
    assert!(!h.exporter.is_sharing());
}

#[tokio::test]
async fn undecodable_image_is_an_error() {
    let h = harness(
        None,
        FakeUploader::returning(Some("https://file.io/abc")),
        RecordingClipboard::default(),
    );

    let outcome = h.exporter.share("blob:not-inline", "Moss").await;

    assert_eq!(outcome, Some(ShareOutcome::Error));
    assert_eq!(h.uploader.call_count(), 0);
    assert!(!h.exporter.is_sharing());
}

#[tokio::test]
async fn concurrent_share_is_ignored() {
    let (native, started, release) = FakeNativeShare::gated();
    let clipboard = Arc::new(RecordingClipboard::default());
    let uploader = Arc::new(FakeUploader::returning(None));
    let native = Arc::new(native);
    let platform = SharePlatform::new(clipboard.clone(), uploader.clone())
        .with_native_share(native.clone());
    let exporter = Arc::new(ShareExporter::new(platform, ShareStatus::new(), RESET_DELAY));

    let first = tokio::spawn({
        let exporter = exporter.clone();
        async move { exporter.share(&png_uri(), "Moss").await }
    });
    started.notified().await;

    assert!(exporter.is_sharing());
    assert_eq!(exporter.share(&png_uri(), "Again").await, None);

    release.notify_one();
    assert_eq!(first.await.unwrap(), Some(ShareOutcome::Success));
    assert!(!exporter.is_sharing());
    assert_eq!(native.share_count(), 1);
    assert_eq!(uploader.call_count(), 0);
}

#[tokio::test]
async fn injected_probe_can_skip_upload() {
    let clipboard = Arc::new(RecordingClipboard::default());
    let uploader = Arc::new(FakeUploader::returning(Some("https://file.io/abc")));
    let platform = SharePlatform::new(clipboard.clone(), uploader.clone());
    let exporter = ShareExporter::new(platform, ShareStatus::new(), RESET_DELAY)
        .with_probe(|_, _| Sharer::ClipboardImage);

    assert_eq!(
        exporter.share(&png_uri(), "Moss").await,
        Some(ShareOutcome::Success)
    );
    assert_eq!(uploader.call_count(), 0);
    assert_eq!(clipboard.images.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn probe_demanding_native_without_facility_is_an_error() {
    let clipboard = Arc::new(RecordingClipboard::default());
    let uploader = Arc::new(FakeUploader::returning(None));
    let platform = SharePlatform::new(clipboard.clone(), uploader.clone());
    let exporter = ShareExporter::new(platform, ShareStatus::new(), RESET_DELAY)
        .with_probe(|_, _| Sharer::NativeShare);

    assert_eq!(
        exporter.share(&png_uri(), "Moss").await,
        Some(ShareOutcome::Error)
    );
    assert_eq!(clipboard.writes(), 0);
}
