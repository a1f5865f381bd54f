//! Service worker generation.

/// Cache-first service worker with offline shell caching of the home
/// page. New fetches fall through to the network and uncached responses
/// are served live.
const SERVICE_WORKER: &str = r"self.addEventListener('install', (e) => {
  e.waitUntil(
    caches.open('titan-store').then((cache) => cache.addAll([
      './index.html',
    ])),
  );
});
self.addEventListener('fetch', (e) => {
  e.respondWith(
    caches.match(e.request).then((response) => response || fetch(e.request)),
  );
});
";

/// Emit `service-worker.js`.
#[must_use]
pub fn service_worker() -> String {
    SERVICE_WORKER.to_owned()
}
