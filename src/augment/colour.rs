use crate::dataloader::sample::Channel;

/// Adds `amount` to every normalized intensity and converts back to a byte,
/// truncating and saturating.
pub fn jitter_channel(channel: &mut Channel, amount: f64) {
    for p in channel.iter_mut() {
        let num = amount + *p as f64 / 255.0;
        let val = (num * 256.0) as i64;
        *p = val.clamp(0, 255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataloader::sample::PIXELS;

    fn ramp() -> Channel {
        let mut channel = [0u8; PIXELS];
        for (idx, p) in channel.iter_mut().enumerate() {
            *p = (idx % 256) as u8;
        }
        channel
    }

    #[test]
    fn saturates() {
        let mut channel = ramp();
        jitter_channel(&mut channel, 10.0);
        assert!(channel.iter().all(|&p| p == 255));

        let mut channel = ramp();
        jitter_channel(&mut channel, -10.0);
        assert!(channel.iter().all(|&p| p == 0));
    }

    #[test]
    fn zero_amount_keeps_values() {
        let mut channel = ramp();
        jitter_channel(&mut channel, 0.0);
        assert_eq!(channel, ramp());
    }

    #[test]
    fn small_shift() {
        let mut channel = [100u8; PIXELS];
        // (100/255 + 0.01) * 256 = 102.95...
        jitter_channel(&mut channel, 0.01);
        assert!(channel.iter().all(|&p| p == 102));

        let mut channel = [0u8; PIXELS];
        jitter_channel(&mut channel, -0.001);
        assert!(channel.iter().all(|&p| p == 0));
    }
}
