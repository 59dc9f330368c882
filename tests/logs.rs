use alloy::primitives::{I256, U256};
use trading_indexer::{
    abi::trading::Trading,
    state::{Effect, Indexer, TraderStats},
    store::{EntityKind, InMemoryStore, StoreExt},
    stream, testing,
};

/// Tests replaying unordered raw logs, as fetched in several pages.
#[test]
fn test_replay_unordered_logs() {
    let chain = testing::chain();
    let (t1, t2) = (testing::trader(1), testing::trader(2));
    let logs = vec![
        testing::log(chain.trading(), 12, 0, &testing::close(2, 90)),
        testing::log(chain.trading(), 10, 1, &testing::open(2, t2, 100, 3)),
        testing::log(chain.trading(), 11, 4, &testing::close(1, 250)),
        testing::log(chain.trading(), 10, 0, &testing::open(1, t1, 200, 10)),
        testing::log(
            chain.trading(),
            11,
            2,
            &Trading::UpdateTPAndSL {
                orderId: U256::from(1),
                tp: U256::from(1200),
                sl: U256::from(900),
            },
        ),
    ];

    let blocks = stream::decode_logs(&chain, &logs).unwrap();
    let mut indexer = Indexer::new(chain, InMemoryStore::new());
    let effects: Vec<_> = blocks
        .iter()
        .filter_map(|block| indexer.apply_events(block).unwrap())
        .flatten()
        .collect();

    assert_eq!(effects.len(), 5);
    assert_eq!(effects[0], Effect::Opened(U256::from(1)));
    assert_eq!(effects[1], Effect::Opened(U256::from(2)));
    assert_eq!(effects[2], Effect::Recorded);
    assert!(matches!(effects[3], Effect::Closed(ref o) if o.trader == t1));
    assert!(matches!(effects[4], Effect::Closed(ref o) if o.trader == t2));
    assert_eq!(indexer.instant().unwrap().block_number(), 12);

    let s1 = indexer
        .store()
        .load::<TraderStats>(&t1.to_string())
        .unwrap()
        .unwrap();
    assert_eq!(s1.total_pnl(), I256::try_from(50).unwrap());
    assert_eq!(s1.total_volume(), U256::from(2000));
    assert_eq!(s1.win_rate(), 100);

    let s2 = indexer
        .store()
        .load::<TraderStats>(&t2.to_string())
        .unwrap()
        .unwrap();
    assert_eq!(s2.total_pnl(), I256::try_from(-10).unwrap());
    assert_eq!(s2.total_volume(), U256::from(300));
    assert_eq!(s2.win_rate(), 0);

    assert_eq!(indexer.store().len(EntityKind::Event), 5);
    assert_eq!(indexer.store().len(EntityKind::Order), 2);
}

/// Tests replaying a range that starts after some orders were opened.
#[test]
fn test_replay_partial_history() {
    let chain = testing::chain();
    let t = testing::trader(1);
    let logs = vec![
        testing::log(chain.trading(), 20, 0, &testing::close(7, 500)),
        testing::log(chain.trading(), 20, 1, &testing::open(8, t, 100, 2)),
        testing::log(chain.trading(), 21, 0, &testing::close(8, 100)),
        testing::log(chain.trading(), 22, 0, &testing::close(9, 1)),
    ];

    let blocks = stream::decode_logs(&chain, &logs).unwrap();
    let mut indexer = Indexer::new(chain, InMemoryStore::new());
    for block in &blocks {
        indexer.apply_events(block).unwrap();
    }

    assert_eq!(indexer.skipped_closes(), 2);
    let stats: Vec<TraderStats> = indexer.store().all().collect();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].trader(), t);
    assert_eq!(stats[0].draws(), 1);
    assert_eq!(stats[0].total_trades(), 1);
}
