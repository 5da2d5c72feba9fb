//! Basic strategy for a multi-deck game where the dealer stands on soft 17.
//!
//! Decisions are made in three tiers. Exactly-two-card pairs are looked up first, then soft
//! totals, and everything left over (including soft totals with no soft rule) falls to the hard
//! totals.
use crate::deck::Rank;
use crate::hand::{evaluate, pair_rank};
use crate::resp::Resp;

/// Recommend a play for the player's cards against the dealer's upcard
pub fn recommend(cards: &[Rank], dealer_up: Option<Rank>) -> Resp {
    let dealer = match dealer_up {
        Some(d) if !cards.is_empty() => d.value(),
        _ => return Resp::Undetermined,
    };
    if let Some(pair) = pair_rank(cards) {
        return pair_resp(pair, dealer);
    }
    let hv = evaluate(cards);
    if hv.soft {
        if let Some(resp) = soft_resp(hv.total, dealer) {
            return resp;
        }
    }
    hard_resp(hv.total, dealer)
}

fn pair_resp(pair: Rank, dealer: u8) -> Resp {
    match pair {
        Rank::RA | Rank::R8 => Resp::Split,
        Rank::R9 => match dealer {
            7 | 10 | 11 => Resp::Stand,
            _ => Resp::Split,
        },
        Rank::R7 | Rank::R3 | Rank::R2 if dealer <= 7 => Resp::Split,
        Rank::R6 if dealer <= 6 => Resp::Split,
        Rank::R5 if dealer <= 9 => Resp::Double,
        Rank::R4 if dealer == 5 || dealer == 6 => Resp::Split,
        // tens and faces have no pair entry
        _ => Resp::Hit,
    }
}

/// None if the soft total has no rule of its own
fn soft_resp(total: u16, dealer: u8) -> Option<Resp> {
    let resp = match total {
        t if t >= 19 => Resp::Stand,
        18 => match dealer {
            3..=6 => Resp::Double,
            2 | 7 | 8 => Resp::Stand,
            _ => Resp::Hit,
        },
        17 => double_against(dealer, 3..=6),
        15 | 16 => double_against(dealer, 4..=6),
        13 | 14 => double_against(dealer, 5..=6),
        _ => return None,
    };
    Some(resp)
}

fn hard_resp(total: u16, dealer: u8) -> Resp {
    match total {
        t if t >= 17 => Resp::Stand,
        13..=16 if dealer <= 6 => Resp::Stand,
        12 if (4..=6).contains(&dealer) => Resp::Stand,
        11 => Resp::Double,
        10 if dealer <= 9 => Resp::Double,
        9 => double_against(dealer, 3..=6),
        _ => Resp::Hit,
    }
}

fn double_against(dealer: u8, range: std::ops::RangeInclusive<u8>) -> Resp {
    if range.contains(&dealer) {
        Resp::Double
    } else {
        Resp::Hit
    }
}

#[cfg(test)]
mod tests {
    use super::recommend;
    use crate::deck::Rank::{self, *};
    use crate::resp::Resp::{self, *};

    const DEALER: [Rank; 10] = [R2, R3, R4, R5, R6, R7, R8, R9, RT, RA];

    /// Check a hand against every dealer upcard 2 through ace. Row is written in that order.
    fn check_row(cards: &[Rank], row: [Resp; 10]) {
        for (d, expect) in DEALER.iter().zip(row.iter()) {
            assert_eq!(
                recommend(cards, Some(*d)),
                *expect,
                "{:?} against {}",
                cards,
                d
            );
        }
    }

    #[test]
    fn undetermined() {
        assert_eq!(recommend(&[], Some(R5)), Undetermined);
        assert_eq!(recommend(&[RK, R7], None), Undetermined);
        assert_eq!(recommend(&[], None), Undetermined);
    }

    #[test]
    fn examples() {
        assert_eq!(recommend(&[RA, R6], Some(R6)), Double);
        assert_eq!(recommend(&[R8, R8], Some(RT)), Split);
        assert_eq!(recommend(&[RK, R7], Some(R9)), Stand);
    }

    #[test]
    fn faces_are_tens_for_the_dealer() {
        for d in &[RT, RJ, RQ, RK] {
            assert_eq!(recommend(&[RT, R6], Some(*d)), Hit);
            assert_eq!(recommend(&[R5, R5], Some(*d)), Hit);
        }
    }

    #[test]
    fn pairs() {
        check_row(&[RA, RA], [Split; 10]);
        check_row(&[R8, R8], [Split; 10]);
        check_row(
            &[R9, R9],
            [Split, Split, Split, Split, Split, Stand, Split, Split, Stand, Stand],
        );
        for p in &[R7, R3, R2] {
            check_row(
                &[*p, *p],
                [Split, Split, Split, Split, Split, Split, Hit, Hit, Hit, Hit],
            );
        }
        check_row(
            &[R6, R6],
            [Split, Split, Split, Split, Split, Hit, Hit, Hit, Hit, Hit],
        );
        check_row(
            &[R5, R5],
            [Double, Double, Double, Double, Double, Double, Double, Double, Hit, Hit],
        );
        check_row(
            &[R4, R4],
            [Hit, Hit, Hit, Split, Split, Hit, Hit, Hit, Hit, Hit],
        );
        for t in &[RT, RJ, RQ, RK] {
            check_row(&[*t, *t], [Hit; 10]);
        }
    }

    #[test]
    fn mixed_tens_are_not_a_pair() {
        check_row(&[RT, RK], [Stand; 10]);
    }

    #[test]
    fn three_of_a_kind_is_not_a_pair() {
        // hard 24, bust, stands by the hard rule
        check_row(&[R8, R8, R8], [Stand; 10]);
        // soft 13
        check_row(&[RA, RA, RA], [Hit, Hit, Hit, Double, Double, Hit, Hit, Hit, Hit, Hit]);
    }

    #[test]
    fn soft_totals() {
        check_row(&[RA, R8], [Stand; 10]);
        check_row(&[RA, R9], [Stand; 10]);
        check_row(&[RA, RK], [Stand; 10]);
        check_row(
            &[RA, R7],
            [Stand, Double, Double, Double, Double, Stand, Stand, Hit, Hit, Hit],
        );
        check_row(
            &[RA, R6],
            [Hit, Double, Double, Double, Double, Hit, Hit, Hit, Hit, Hit],
        );
        for c in &[R4, R5] {
            check_row(
                &[RA, *c],
                [Hit, Hit, Double, Double, Double, Hit, Hit, Hit, Hit, Hit],
            );
        }
        for c in &[R2, R3] {
            check_row(
                &[RA, *c],
                [Hit, Hit, Hit, Double, Double, Hit, Hit, Hit, Hit, Hit],
            );
        }
        // multi-card soft hands use the same rules
        check_row(
            &[RA, R2, R4],
            [Hit, Double, Double, Double, Double, Hit, Hit, Hit, Hit, Hit],
        );
    }

    #[test]
    fn soft_turned_hard() {
        // A 6 9 is a hard 16
        check_row(
            &[RA, R6, R9],
            [Stand, Stand, Stand, Stand, Stand, Hit, Hit, Hit, Hit, Hit],
        );
    }

    #[test]
    fn hard_totals() {
        check_row(&[RT, R7], [Stand; 10]);
        check_row(&[R2, R3, R6], [Double; 10]);
        for cards in &[[RT, R3], [RT, R6], [R9, R4]] {
            check_row(
                cards,
                [Stand, Stand, Stand, Stand, Stand, Hit, Hit, Hit, Hit, Hit],
            );
        }
        check_row(
            &[RT, R2],
            [Hit, Hit, Stand, Stand, Stand, Hit, Hit, Hit, Hit, Hit],
        );
        check_row(&[R9, R2], [Double; 10]);
        check_row(
            &[R6, R4],
            [Double, Double, Double, Double, Double, Double, Double, Double, Hit, Hit],
        );
        check_row(
            &[R6, R3],
            [Hit, Double, Double, Double, Double, Hit, Hit, Hit, Hit, Hit],
        );
        check_row(&[R5, R3], [Hit; 10]);
        check_row(&[R2, R3], [Hit; 10]);
        check_row(&[R4], [Hit; 10]);
    }
}
