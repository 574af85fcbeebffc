//! Transcript surface the player renders into.
//!
//! The UI owns the transcript (`SharedTranscript`); the player only holds a
//! [`TranscriptSurface`], a weak handle that turns every write into a no-op
//! once the UI side is gone.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::player::lexer::RevealToken;
use crate::script::ResultItem;

pub type SharedTranscript = Arc<Mutex<Transcript>>;

/// Identifies one playback run; stale runs are recognised by token mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunToken(pub(crate) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(u64);

/// Styled run of assistant text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Bold(String),
    Code(String),
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResultBody {
    Text(String),
    Items(Vec<ResultItem>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Shown while no scenario is selected
    Placeholder,
    /// "Starting demo..." banner at the top of each run
    StartBanner,
    User {
        content: String,
        typing: bool,
    },
    Assistant {
        thinking: bool,
        segments: Vec<Segment>,
    },
    ToolCall {
        tool: String,
        params: String,
    },
    ToolResult(ToolResultBody),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub kind: EntryKind,
}

#[derive(Debug)]
pub struct Transcript {
    entries: Vec<Entry>,
    next_id: u64,
    /// Run currently allowed to write; `None` while idle
    owner: Option<RunToken>,
    /// Bumped on every mutation so views can cheaply detect changes
    revision: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::idle()
    }
}

impl Transcript {
    /// Fresh transcript showing the idle placeholder
    pub fn idle() -> Self {
        let mut transcript = Self {
            entries: Vec::new(),
            next_id: 0,
            owner: None,
            revision: 0,
        };
        transcript.push(EntryKind::Placeholder);
        transcript
    }

    pub fn shared() -> SharedTranscript {
        Arc::new(Mutex::new(Self::idle()))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn owner(&self) -> Option<RunToken> {
        self.owner
    }

    pub fn is_idle(&self) -> bool {
        self.owner.is_none()
            && matches!(self.entries.as_slice(), [Entry { kind: EntryKind::Placeholder, .. }])
    }

    pub fn push(&mut self, kind: EntryKind) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, kind });
        self.revision += 1;
        id
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn remove(&mut self, id: EntryId) {
        self.entries.retain(|e| e.id != id);
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.revision += 1;
    }

    /// Hand the transcript to a new run, starting from empty
    pub(crate) fn begin_run(&mut self, token: RunToken) {
        self.owner = Some(token);
        self.clear();
    }

    /// Detach any run and show the placeholder again
    pub(crate) fn reset_idle(&mut self) {
        self.owner = None;
        self.entries.clear();
        self.push(EntryKind::Placeholder);
    }

    pub fn finish_typing(&mut self, id: EntryId) {
        if let Some(EntryKind::User { typing, .. }) = self.kind_mut(id) {
            *typing = false;
            self.revision += 1;
        }
    }

    pub fn finish_thinking(&mut self, id: EntryId) {
        if let Some(EntryKind::Assistant { thinking, .. }) = self.kind_mut(id) {
            *thinking = false;
            self.revision += 1;
        }
    }

    /// Append one revealed token to an assistant entry
    pub fn append_token(&mut self, id: EntryId, token: RevealToken) {
        let Some(EntryKind::Assistant { segments, .. }) = self.kind_mut(id) else {
            return;
        };
        match token {
            RevealToken::Char(c) => match segments.last_mut() {
                Some(Segment::Text(text)) => text.push(c),
                _ => segments.push(Segment::Text(c.to_string())),
            },
            RevealToken::LineBreak => segments.push(Segment::LineBreak),
            RevealToken::Bold(text) => segments.push(Segment::Bold(text)),
            RevealToken::Code(text) => segments.push(Segment::Code(text)),
        }
        self.revision += 1;
    }

    fn kind_mut(&mut self, id: EntryId) -> Option<&mut EntryKind> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.kind)
    }
}

/// Plain text of a segment list, line breaks as `\n`
pub fn segments_text(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match s {
            Segment::Text(t) | Segment::Bold(t) | Segment::Code(t) => t.as_str(),
            Segment::LineBreak => "\n",
        })
        .collect()
}

/// Weak write handle held by the player
#[derive(Debug, Clone)]
pub struct TranscriptSurface {
    inner: Weak<Mutex<Transcript>>,
}

impl TranscriptSurface {
    pub fn new(transcript: &SharedTranscript) -> Self {
        Self {
            inner: Arc::downgrade(transcript),
        }
    }

    /// Run `f` if the surface is still mounted
    pub fn with<R>(&self, f: impl FnOnce(&mut Transcript) -> R) -> Option<R> {
        let transcript = self.inner.upgrade()?;
        let mut guard = transcript.lock();
        Some(f(&mut guard))
    }

    /// Run `f` only if the surface is mounted and still owned by `token`
    pub fn with_owner<R>(
        &self,
        token: RunToken,
        f: impl FnOnce(&mut Transcript) -> R,
    ) -> Option<R> {
        let transcript = self.inner.upgrade()?;
        let mut guard = transcript.lock();
        if guard.owner != Some(token) {
            return None;
        }
        Some(f(&mut guard))
    }
}
