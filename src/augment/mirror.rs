use crate::dataloader::sample::{Channel, IMAGE_SIZE};

/// Reflects a channel horizontally in place. Applying it twice restores the input.
pub fn mirror_channel(channel: &mut Channel) {
    for row in channel.chunks_exact_mut(IMAGE_SIZE) {
        row.reverse();
    }
}
