//! Property-based tests for the remote listing parser.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated listings.

use proptest::prelude::*;

use pullr::core::remotes::RemoteRegistry;

/// Strategy for remote, owner, and repository name segments.
fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_][A-Za-z0-9_.-]{0,15}".prop_filter("no .git suffix", |s| !s.ends_with(".git"))
}

/// Strategy for a URL in one of the shapes git accepts.
fn url(owner: String, repo: String) -> impl Strategy<Value = String> {
    (0..4usize, any::<bool>()).prop_map(move |(shape, suffix)| {
        let repo = if suffix {
            format!("{}.git", repo)
        } else {
            repo.clone()
        };
        match shape {
            0 => format!("https://forge.example/{}/{}", owner, repo),
            1 => format!("git@forge.example:{}/{}", owner, repo),
            2 => format!("ssh://git@forge.example:2222/{}/{}", owner, repo),
            _ => format!("http://localhost:9000/git/{}/{}", owner, repo),
        }
    })
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    owner: String,
    repo: String,
    url: String,
    fetch: bool,
    push: bool,
}

fn entry() -> impl Strategy<Value = Entry> {
    (segment(), segment(), segment(), any::<bool>(), any::<bool>()).prop_flat_map(
        |(name, owner, repo, fetch, push)| {
            url(owner.clone(), repo.clone()).prop_map(move |url| Entry {
                name: name.clone(),
                owner: owner.clone(),
                repo: repo.clone(),
                url,
                fetch,
                push,
            })
        },
    )
}

fn render(entries: &[Entry]) -> String {
    let mut listing = String::new();
    for entry in entries {
        if entry.fetch {
            listing.push_str(&format!("{}\t{} (fetch)\n", entry.name, entry.url));
        }
        if entry.push {
            listing.push_str(&format!("{}\t{} (push)\n", entry.name, entry.url));
        }
    }
    listing.push('\n');
    listing
}

proptest! {
    #[test]
    fn parsing_is_deterministic(entries in prop::collection::vec(entry(), 0..8)) {
        let listing = render(&entries);
        let first = RemoteRegistry::parse(&listing).unwrap();
        let second = RemoteRegistry::parse(&listing).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn only_fetch_entries_are_registered(entries in prop::collection::vec(entry(), 0..8)) {
        let registry = RemoteRegistry::parse(&render(&entries)).unwrap();

        for descriptor in registry.iter() {
            prop_assert!(entries.iter().any(|e| e.fetch && e.name == descriptor.name));
        }
        for entry in entries.iter().filter(|e| e.fetch) {
            prop_assert!(registry.get(&entry.name).is_some());
        }
        for entry in entries.iter().filter(|e| !e.fetch) {
            if !entries.iter().any(|other| other.fetch && other.name == entry.name) {
                prop_assert!(registry.get(&entry.name).is_none());
            }
        }
    }

    #[test]
    fn owner_and_repo_come_from_the_url(entry in entry()) {
        let fetch_only = Entry { fetch: true, push: false, ..entry };
        let registry = RemoteRegistry::parse(&render(std::slice::from_ref(&fetch_only))).unwrap();

        let descriptor = registry.get(&fetch_only.name).unwrap();
        prop_assert_eq!(&descriptor.owner, &fetch_only.owner);
        prop_assert_eq!(&descriptor.repo, &fetch_only.repo);
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,200}") {
        let _ = RemoteRegistry::parse(&text);
    }
}
