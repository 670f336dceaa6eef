#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const CURRENCY: &str = "₹";
    pub const ID: &str = "ID";
    pub const FRIEND: &str = "友達";
    pub const AVATAR: &str = "アバター";
    pub const BALANCE: &str = "収支";
    pub const NO_FRIENDS: &str = "友達がまだいません";
    pub const ADD_FRIEND: &str = "友達を追加";
    pub const CLOSE: &str = "閉じる";
    pub const SELECT: &str = "選択";
    pub const ADD: &str = "追加";
    pub const SPLIT_BILL: &str = "割り勘する";
    pub const NAME_LABEL: &str = "名前";
    pub const AVATAR_LABEL: &str = "画像URL";
    pub const BILL_LABEL: &str = "請求額";
    pub const USER_EXPENSE_LABEL: &str = "あなたの支出";
    pub const PAYER_LABEL: &str = "支払う人";
    pub const PAYER_USER: &str = "あなた";
    pub const PAYER_FRIEND: &str = "友達";
    pub const FILL_ALL_FIELDS: &str = "すべての項目を入力してください";
    pub const NEGATIVE_BILL: &str = "請求額は0以上にしてください";
    pub const NEGATIVE_EXPENSE: &str = "支出は0以上にしてください";
    pub const EXPENSE_EXCEEDS_BILL: &str = "あなたの支出が請求額を超えています";
    pub const NOTHING_TO_SUBMIT: &str = "送信できるフォームが開いていません";
    pub const ADD_FRIEND_FORM_CLOSED: &str = "友達追加フォームが開いていません";
    pub const SPLIT_BILL_FORM_CLOSED: &str = "友達が選択されていません";
    pub const BALANCE_OVERFLOW: &str = "この割り勘を記録すると収支が扱える範囲を超えます";
    pub const HELP: &str = "\
コマンド:
  list                 画面を再表示
  add                  友達追加フォームを開閉
  name <名前>          友達の名前を入力
  avatar <URL>         友達の画像URLを入力
  select <ID|名前>     割り勘する友達を選択/解除
  close                選択を解除
  bill <金額>          請求額を入力
  expense <金額>       あなたの支出を入力
  payer user|friend    支払う人を選択
  submit               開いているフォームを送信
  help                 このヘルプを表示
  quit                 終了";
}

#[cfg(any(feature = "en", not(feature = "ja")))]
pub mod strings {
    pub const CURRENCY: &str = "₹";
    pub const ID: &str = "ID";
    pub const FRIEND: &str = "Friend";
    pub const AVATAR: &str = "Avatar";
    pub const BALANCE: &str = "Balance";
    pub const NO_FRIENDS: &str = "No friends yet";
    pub const ADD_FRIEND: &str = "Add Friend";
    pub const CLOSE: &str = "Close";
    pub const SELECT: &str = "Select";
    pub const ADD: &str = "Add";
    pub const SPLIT_BILL: &str = "Split Bill";
    pub const NAME_LABEL: &str = "Friend name";
    pub const AVATAR_LABEL: &str = "Image URL";
    pub const BILL_LABEL: &str = "Bill value";
    pub const USER_EXPENSE_LABEL: &str = "Your expense";
    pub const PAYER_LABEL: &str = "Who is paying the bill";
    pub const PAYER_USER: &str = "You";
    pub const PAYER_FRIEND: &str = "Friend";
    pub const FILL_ALL_FIELDS: &str = "Please fill all the fields";
    pub const NEGATIVE_BILL: &str = "Bill value cannot be negative";
    pub const NEGATIVE_EXPENSE: &str = "Your expense cannot be negative";
    pub const EXPENSE_EXCEEDS_BILL: &str = "Your expense cannot be more than the bill";
    pub const NOTHING_TO_SUBMIT: &str = "There is no open form to submit";
    pub const ADD_FRIEND_FORM_CLOSED: &str = "The add friend form is not open";
    pub const SPLIT_BILL_FORM_CLOSED: &str = "No friend is selected";
    pub const BALANCE_OVERFLOW: &str =
        "That bill would push the balance beyond what can be recorded";
    pub const HELP: &str = "\
Commands:
  list                 redraw the screen
  add                  open or close the add friend form
  name <text>          set the new friend's name
  avatar <url>         set the new friend's image URL
  select <id|name>     select or deselect a friend to split with
  close                deselect the friend
  bill <amount>        set the bill value
  expense <amount>     set your expense
  payer user|friend    choose who is paying the bill
  submit               submit the open form
  help                 show this help
  quit                 exit";
}

pub use strings::*;

#[cfg(feature = "ja")]
mod messages {
    use std::fmt::Display;

    pub fn you_owe(name: impl Display, amount: impl Display) -> String {
        format!("あなたは{name}に{}{amount}の借りがあります", super::CURRENCY)
    }

    pub fn owes_you(name: impl Display, amount: impl Display) -> String {
        format!("{name}はあなたに{}{amount}の借りがあります", super::CURRENCY)
    }

    pub fn even(name: impl Display) -> String {
        format!("あなたと{name}は貸し借りなしです")
    }

    pub fn split_with(name: impl Display) -> String {
        format!("{name}と割り勘する")
    }

    pub fn friend_expense_label(name: impl Display) -> String {
        format!("{name}の支出")
    }

    pub fn not_a_number(field: impl Display, input: impl Display) -> String {
        format!("{field}の「{input}」は数値ではありません")
    }

    pub fn out_of_range(field: impl Display, input: impl Display) -> String {
        format!("{field}の「{input}」は大きすぎるか桁数が多すぎます")
    }

    pub fn duplicate_friend(id: impl Display) -> String {
        format!("ID {id} の友達が重複しています")
    }

    pub fn unknown_friend(id: impl Display) -> String {
        format!("ID {id} の友達は存在しません")
    }

    pub fn unknown_friend_name(name: impl Display) -> String {
        format!("{name}という名前の友達はいません")
    }

    pub fn friend_added(name: impl Display) -> String {
        format!("{name}を追加しました")
    }

    pub fn settlement_applied(name: impl Display) -> String {
        format!("{name}との割り勘を記録しました")
    }

    pub fn command_error(detail: impl Display) -> String {
        format!("コマンドを解釈できません: {detail} (help でコマンド一覧)")
    }
}

#[cfg(any(feature = "en", not(feature = "ja")))]
mod messages {
    use std::fmt::Display;

    pub fn you_owe(name: impl Display, amount: impl Display) -> String {
        format!("You owe {name} {}{amount}", super::CURRENCY)
    }

    pub fn owes_you(name: impl Display, amount: impl Display) -> String {
        format!("{name} owes you {}{amount}", super::CURRENCY)
    }

    pub fn even(name: impl Display) -> String {
        format!("You and {name} are even")
    }

    pub fn split_with(name: impl Display) -> String {
        format!("Split a bill with {name}")
    }

    pub fn friend_expense_label(name: impl Display) -> String {
        format!("{name}'s expense")
    }

    pub fn not_a_number(field: impl Display, input: impl Display) -> String {
        format!("{field} '{input}' is not a number")
    }

    pub fn out_of_range(field: impl Display, input: impl Display) -> String {
        format!("{field} '{input}' is too large or too precise")
    }

    pub fn duplicate_friend(id: impl Display) -> String {
        format!("Friend id {id} is used more than once")
    }

    pub fn unknown_friend(id: impl Display) -> String {
        format!("There is no friend with id {id}")
    }

    pub fn unknown_friend_name(name: impl Display) -> String {
        format!("There is no friend named {name}")
    }

    pub fn friend_added(name: impl Display) -> String {
        format!("Added {name}")
    }

    pub fn settlement_applied(name: impl Display) -> String {
        format!("Split the bill with {name}")
    }

    pub fn command_error(detail: impl Display) -> String {
        format!("Could not understand that: {detail} (type help for commands)")
    }
}

pub use messages::*;
