//! Integration tests for market refill invariants.

use fishcook_market::{
    farmers::farmers_prices, DieFace, DieRoller, FarmersMarket, FishMarket, Market, MarketError,
    Produce, ScriptedDice, SecureDice, FISH_DICE_PER_REFILL, FISH_PRICES, FISH_TIERS,
    FISH_TIER_CAPACITY, PRODUCE_TIERS,
};

const REFILLS: usize = 1_000;

fn tier_counts(market: &FishMarket) -> [usize; FISH_TIERS] {
    std::array::from_fn(|row| market.inventory().revealed_in_row(row))
}

#[test]
fn test_prices_never_change() {
    let mut dice = SecureDice::seeded(0xF15C);
    let mut fish = FishMarket::new();
    let mut farmers = FarmersMarket::new();
    let farmer_prices = farmers_prices();

    for _ in 0..REFILLS {
        fish.refill(&mut dice).unwrap();
        farmers.refill(&mut dice);
        assert_eq!(fish.inventory().prices(), FISH_PRICES);
        assert_eq!(farmers.inventory().prices(), farmer_prices);
    }
}

#[test]
fn test_fish_capacity_and_conservation() {
    let mut dice = SecureDice::from_entropy();
    let mut fish = FishMarket::new();

    for _ in 0..REFILLS {
        fish.refill(&mut dice).unwrap();
        let counts = tier_counts(&fish);
        assert!(counts.iter().all(|&c| c <= FISH_TIER_CAPACITY), "{counts:?}");
        assert_eq!(counts.iter().sum::<usize>(), FISH_DICE_PER_REFILL);
    }
}

#[test]
fn test_fish_markers_name_their_tier() {
    let mut dice = SecureDice::seeded(11);
    let mut fish = FishMarket::new();

    for _ in 0..100 {
        fish.refill(&mut dice).unwrap();
        for (row, cells) in fish.inventory().iter_rows().enumerate() {
            let expected = DieFace::new((FISH_TIERS - row) as u8);
            for cell in cells.iter().filter(|c| c.is_revealed()) {
                assert_eq!(cell.marker(), expected);
            }
            // Revealed cells form a contiguous run at the expensive end
            let revealed = fish.inventory().revealed_in_row(row);
            for (col, cell) in cells.iter().enumerate() {
                assert_eq!(cell.is_revealed(), col >= FISH_TIER_CAPACITY - revealed);
            }
        }
    }
}

#[test]
fn test_fish_fixed_rolls_without_overflow() {
    let mut dice = ScriptedDice::from_values(&[6, 6, 6, 5, 5, 4, 4, 3, 3, 2, 2, 1]).unwrap();
    let fish = FishMarket::stocked(&mut dice).unwrap();

    // Rows are faces 6..1
    assert_eq!(tier_counts(&fish), [3, 2, 2, 2, 2, 1]);
    assert_eq!(dice.thrown(), FISH_DICE_PER_REFILL);
}

#[test]
fn test_fish_all_sixes_is_corrected() {
    // Twelve sixes, then rethrows: 6 is rejected, the rest move one unit each
    let mut script = vec![6; 12];
    script.extend([6, 1, 2, 3, 6, 4, 5, 1, 2]);
    let mut dice = ScriptedDice::from_values(&script).unwrap();
    let fish = FishMarket::stocked(&mut dice).unwrap();

    let counts = tier_counts(&fish);
    assert_eq!(counts, [5, 1, 1, 1, 2, 2]);
    assert_eq!(counts.iter().sum::<usize>(), FISH_DICE_PER_REFILL);
    assert_eq!(fish.allocation().count(DieFace::SIX), FISH_TIER_CAPACITY);
}

#[test]
fn test_fish_all_sixes_with_fair_dice() {
    struct SixesThenFair {
        sixes: usize,
        fair: SecureDice,
    }

    impl DieRoller for SixesThenFair {
        fn roll_one(&mut self) -> DieFace {
            if self.sixes > 0 {
                self.sixes -= 1;
                DieFace::SIX
            } else {
                self.fair.roll_one()
            }
        }
    }

    for seed in 0..50 {
        let mut dice = SixesThenFair {
            sixes: FISH_DICE_PER_REFILL,
            fair: SecureDice::seeded(seed),
        };
        let fish = FishMarket::stocked(&mut dice).unwrap();
        let counts = tier_counts(&fish);
        assert_eq!(counts[0], FISH_TIER_CAPACITY);
        assert!(counts.iter().all(|&c| c <= FISH_TIER_CAPACITY));
        assert_eq!(counts.iter().sum::<usize>(), FISH_DICE_PER_REFILL);
    }
}

#[test]
fn test_fish_stuck_dice_report_non_convergence() {
    let mut fish = FishMarket::new();
    let mut dice = ScriptedDice::from_values(&[2]).unwrap();

    let err = fish.refill(&mut dice).unwrap_err();
    assert!(matches!(err, MarketError::AllocationDidNotConverge { .. }));
    assert_eq!(fish.inventory().revealed_count(), 0);
}

#[test]
fn test_farmers_threshold_fill() {
    // Sake = {base, [1,2], [3,4], [5], [6]}
    let mut dice = ScriptedDice::from_values(&[3, 1, 1, 1, 1, 1]).unwrap();
    let farmers = FarmersMarket::stocked(&mut dice);
    let sake: Vec<bool> = farmers
        .inventory()
        .column(Produce::Sake.column())
        .map(|c| c.is_revealed())
        .collect();
    assert_eq!(sake, vec![true, false, true, false, false]);

    let mut dice = ScriptedDice::from_values(&[6, 1, 1, 1, 1, 1]).unwrap();
    let farmers = FarmersMarket::stocked(&mut dice);
    let sake: Vec<bool> = farmers
        .inventory()
        .column(Produce::Sake.column())
        .map(|c| c.is_revealed())
        .collect();
    assert_eq!(sake, vec![true, false, false, false, true]);
}

#[test]
fn test_refill_replaces_previous_markers() {
    let mut fish = FishMarket::new();
    let mut farmers = FarmersMarket::new();

    // First: fish heavy on 6, farmers all 1
    let mut first = ScriptedDice::from_values(&[6, 6, 6, 6, 6, 5, 5, 5, 5, 5, 4, 4]).unwrap();
    fish.refill(&mut first).unwrap();
    let mut first = ScriptedDice::from_values(&[1]).unwrap();
    farmers.refill(&mut first);

    // Second: fish heavy on 1, farmers all 6
    let mut second = ScriptedDice::from_values(&[1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3]).unwrap();
    fish.refill(&mut second).unwrap();
    let mut second = ScriptedDice::from_values(&[6]).unwrap();
    farmers.refill(&mut second);

    assert_eq!(tier_counts(&fish), [0, 0, 0, 2, 5, 5]);
    for produce in Produce::ALL {
        let col = produce.column();
        // Tier 1 accepts 1 in every column except Rice, where it is a base tier
        if produce != Produce::Rice {
            assert!(!farmers.inventory().get(1, col).unwrap().is_revealed());
        }
        assert!(farmers.inventory().get(PRODUCE_TIERS - 1, col).unwrap().is_revealed());
    }
}

#[test]
fn test_inventory_reads_do_not_mutate() {
    let mut dice = SecureDice::seeded(5);
    let fish = FishMarket::stocked(&mut dice).unwrap();
    let farmers = FarmersMarket::stocked(&mut dice);

    let fish_snapshot = fish.inventory().clone();
    let farmers_snapshot = farmers.inventory().clone();
    for _ in 0..10 {
        assert_eq!(fish.inventory(), &fish_snapshot);
        assert_eq!(farmers.inventory(), &farmers_snapshot);
    }
}

#[test]
fn test_markets_refill_through_trait() {
    fn restock<M: Market>(market: &mut M, dice: &mut dyn DieRoller) {
        market.refill(dice).unwrap();
    }

    let mut dice = SecureDice::seeded(8);
    let mut fish = FishMarket::new();
    let mut farmers = FarmersMarket::new();
    restock(&mut fish, &mut dice);
    restock(&mut farmers, &mut dice);

    assert_eq!(fish.inventory().revealed_count(), FISH_DICE_PER_REFILL);
    assert!(farmers.rolls().is_some());
}
