//! Block-policy selection and template-key normalization.

use std::path::PathBuf;

use numgap_core::{
    ArtifactKind, BlockPolicy, Entry, NumericBlock, TemplateKey, UnmatchedReason, PLACEHOLDER,
};

/// One numeric block chosen by the active policy, together with the
/// grouping key it implies.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Containing directory of the source entry.
    pub directory: PathBuf,
    /// File or directory.
    pub kind: ArtifactKind,
    /// On-disk size of the source entry.
    pub size: u64,
    /// The selected block.
    pub block: NumericBlock,
    /// The template key this selection groups under.
    pub key: TemplateKey,
}

/// Apply the block policy to an entry.
///
/// Under `All`, the entry fans out to one selection per block position,
/// each with a key that blanks only that position and keeps every other
/// digit run literal. An explicit index with no block at that position
/// makes the entry unmatched, as does a name without digits.
pub fn select_blocks(
    entry: &Entry,
    policy: BlockPolicy,
    width_sensitive: bool,
) -> Result<Vec<Selection>, UnmatchedReason> {
    if entry.blocks.is_empty() {
        return Err(UnmatchedReason::NoDigits);
    }

    let chosen: Vec<&NumericBlock> = match policy {
        BlockPolicy::First => vec![&entry.blocks[0]],
        BlockPolicy::Last => vec![&entry.blocks[entry.blocks.len() - 1]],
        BlockPolicy::Largest => {
            // Ties go to the leftmost block.
            let mut best = &entry.blocks[0];
            for block in &entry.blocks[1..] {
                if block.value > best.value {
                    best = block;
                }
            }
            vec![best]
        }
        BlockPolicy::All => entry.blocks.iter().collect(),
        BlockPolicy::Index(idx) => match entry.blocks.get(idx) {
            Some(block) => vec![block],
            None => return Err(UnmatchedReason::NoBlockAtIndex(idx)),
        },
    };

    Ok(chosen
        .into_iter()
        .map(|block| Selection {
            directory: entry.directory.clone(),
            kind: entry.kind,
            size: entry.size,
            block: block.clone(),
            key: template_key(&entry.name, block, width_sensitive),
        })
        .collect())
}

/// Build the grouping key for one selected block: the name with the
/// block's text replaced by the placeholder, plus the width class when
/// width-sensitive matching is on.
fn template_key(name: &str, block: &NumericBlock, width_sensitive: bool) -> TemplateKey {
    let mut skeleton = String::with_capacity(name.len());
    skeleton.push_str(&name[..block.start]);
    skeleton.push_str(PLACEHOLDER);
    skeleton.push_str(&name[block.end..]);
    TemplateKey::new(skeleton, width_sensitive.then_some(block.width))
}
