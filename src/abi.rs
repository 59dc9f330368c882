#[allow(clippy::too_many_arguments)]
pub mod trading {
    alloy::sol!(
        /// Perpetuals trading contract, events only.
        #[sol(all_derives)]
        interface Trading {
            struct TradeParams {
                address trader;
                uint256 pairIndex;
                uint256 margin;
                bool isLong;
                uint256 leverage;
                uint256 tp;
                uint256 sl;
            }

            struct Trade {
                TradeParams params;
                uint256 openPrice;
                uint256 openTime;
            }

            struct OpenRequest {
                uint256 index;
                TradeParams params;
                uint256 limitPrice;
                uint256 slippageP;
                uint256 requestTime;
                bool isMarket;
            }

            event Callback(address target, bool result);
            event CancelOpen(uint256 orderId);
            event Close(
                uint256 orderId,
                uint256 closePrice,
                uint256 closeMargin,
                int256 fundingFee,
                uint256 rolloverFee,
                uint256 closeFee,
                uint256 afterFee,
                uint8 status
            );
            event ExecRequestClose(uint256 orderId, uint256 index, uint8 status);
            event ExecRequestOpen(uint256 orderId, uint8 status);
            event Initialized(uint64 version);
            event Open(uint256 orderId, Trade t, uint256 fee);
            event OwnershipTransferStarted(address indexed previousOwner, address indexed newOwner);
            event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
            event RequestClose(uint256 orderId, uint256 index, uint256 closeMargin, uint256 requestTime);
            event RequestOpen(uint256 orderId, OpenRequest request);
            event SetContract(address tradingStorage, address usdt);
            event SetNativeFeeForKeeper(uint256 forOpen, uint256 forClose, uint256 forCallback, uint256 gasLimit);
            event SetParams(uint256 liquidationP, uint256 spreadReductionP, uint256 maxMarketTradeOpenTime, bool tradeSwitch);
            event SetReserve(address receiver, uint256 rate);
            event TradeClosed(uint256 orderId);
            event UpdateMargin(uint256 orderId, uint256 amount, bool isAdd, uint256 margin, uint256 leverage);
            event UpdateOpenRequest(uint256 orderId, uint256 limitPrice, uint256 tp, uint256 sl);
            event UpdateTPAndSL(uint256 orderId, uint256 tp, uint256 sl);
        }
    );
}

use trading::Trading::TradingEvents;

/// Static name of the decoded event, as declared in the contract ABI.
pub fn event_name(event: &TradingEvents) -> &'static str {
    match event {
        TradingEvents::Callback(_) => "Callback",
        TradingEvents::CancelOpen(_) => "CancelOpen",
        TradingEvents::Close(_) => "Close",
        TradingEvents::ExecRequestClose(_) => "ExecRequestClose",
        TradingEvents::ExecRequestOpen(_) => "ExecRequestOpen",
        TradingEvents::Initialized(_) => "Initialized",
        TradingEvents::Open(_) => "Open",
        TradingEvents::OwnershipTransferStarted(_) => "OwnershipTransferStarted",
        TradingEvents::OwnershipTransferred(_) => "OwnershipTransferred",
        TradingEvents::RequestClose(_) => "RequestClose",
        TradingEvents::RequestOpen(_) => "RequestOpen",
        TradingEvents::SetContract(_) => "SetContract",
        TradingEvents::SetNativeFeeForKeeper(_) => "SetNativeFeeForKeeper",
        TradingEvents::SetParams(_) => "SetParams",
        TradingEvents::SetReserve(_) => "SetReserve",
        TradingEvents::TradeClosed(_) => "TradeClosed",
        TradingEvents::UpdateMargin(_) => "UpdateMargin",
        TradingEvents::UpdateOpenRequest(_) => "UpdateOpenRequest",
        TradingEvents::UpdateTPAndSL(_) => "UpdateTPAndSL",
    }
}
