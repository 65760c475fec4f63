pub const EMPTY_DOC_INPUT: &str = r"---
";

pub const EMPTY_DOC_EVENTS: &str = r"
+DOC
=VAL :
-DOC";

pub const BLOCK1_INPUT: &str = r"
    - x
    - y
";

pub const BLOCK2_INPUT: &str = r"
- x
- y
";

pub const BLOCK_EVENTS: &str = r"
+DOC
+SEQ
=VAL :x
=VAL :y
-SEQ
-DOC";

pub const BLOCK_NESTED_SEQ_INPUT: &str = r"
- - a
  - b
- c
";

pub const BLOCK_NESTED_SEQ_EVENTS: &str = r"
+DOC
+SEQ
+SEQ
=VAL :a
=VAL :b
-SEQ
=VAL :c
-SEQ
-DOC";

pub const BLOCK_MAP_INPUT: &str = r"
a: 1
b: 2
";

pub const BLOCK_MAP_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :1
=VAL :b
=VAL :2
-MAP
-DOC";

pub const BLOCK_EMPTY_VALUE_INPUT: &str = r"
a:
b: 2
";

pub const BLOCK_EMPTY_VALUE_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :
=VAL :b
=VAL :2
-MAP
-DOC";

pub const BLOCK_MAP_IN_SEQ_INPUT: &str = r"
- key 1: value 1
  key 2: value 2
- ? complex key
  : complex value
";

pub const BLOCK_MAP_IN_SEQ_EVENTS: &str = r"
+DOC
+SEQ
+MAP
=VAL :key 1
=VAL :value 1
=VAL :key 2
=VAL :value 2
-MAP
+MAP
=VAL :complex key
=VAL :complex value
-MAP
-SEQ
-DOC";

pub const BLOCK_COMPACT_SEQ_INPUT: &str = r"
key:
- item 1
- item 2
other: x
";

pub const BLOCK_COMPACT_SEQ_EVENTS: &str = r"
+DOC
+MAP
=VAL :key
+SEQ
=VAL :item 1
=VAL :item 2
-SEQ
=VAL :other
=VAL :x
-MAP
-DOC";

pub const BLOCK_EXPLICIT_KEY_INPUT: &str = r"
? a sequence
: - item 1
  - item 2
? a mapping
: key 1: value 1
";

pub const BLOCK_EXPLICIT_KEY_EVENTS: &str = r"
+DOC
+MAP
=VAL :a sequence
+SEQ
=VAL :item 1
=VAL :item 2
-SEQ
=VAL :a mapping
+MAP
=VAL :key 1
=VAL :value 1
-MAP
-MAP
-DOC";

pub const LITERAL_INPUT: &str = r"
a: |
  line 1
  line 2
b: |-
  stripped
c: |+
  kept

";

pub const LITERAL_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL |line 1\nline 2\n
=VAL :b
=VAL |stripped
=VAL :c
=VAL |kept\n\n
-MAP
-DOC";

pub const FOLD_INPUT: &str = r"
--- >
 Sammy Sosa completed another
 fine season with great stats.

   63 Home Runs
   0.288 Batting Average

 What a year!";

pub const FOLD_EVENTS: &str = r"
+DOC
=VAL >Sammy Sosa completed another fine season with great stats.\n\n  63 Home Runs\n  0.288 Batting Average\n\nWhat a year!\n
-DOC";

pub const MULTILINE_PLAIN_INPUT: &str = r"
key: first
  second

  third
";

pub const MULTILINE_PLAIN_EVENTS: &str = r"
+DOC
+MAP
=VAL :key
=VAL :first second\nthird
-MAP
-DOC";

pub const ANCHOR_INPUT: &str = r"
a: &x 1
b: *x
c: &seq
  - 2
";

pub const ANCHOR_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL &x :1
=VAL :b
=ALI *x
=VAL :c
+SEQ &seq
=VAL :2
-SEQ
-MAP
-DOC";

pub const TAG_INPUT: &str = r"
- !!int 3
- !local x
- !<tag:example.com,2000:app/foo> y
- ! z
";

pub const TAG_EVENTS: &str = r"
+DOC
+SEQ
=VAL <tag:yaml.org,2002:int> :3
=VAL <!local> :x
=VAL <tag:example.com,2000:app/foo> :y
=VAL <!> :z
-SEQ
-DOC";

pub const MULTI_DOC_INPUT: &str = r"--- a
--- b
...
c
";

pub const MULTI_DOC_EVENTS: &str = r"
+DOC
=VAL :a
-DOC
+DOC
=VAL :b
-DOC
+DOC
=VAL :c
-DOC";

pub const DIRECTIVE_INPUT: &str = r"%YAML 1.2
%FOO bar
---
a: 1
";

pub const DIRECTIVE_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :1
-MAP
-DOC";

pub const UNITY_INPUT: &str = r"%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!29 &1
OcclusionCullingSettings:
  m_ObjectHideFlags: 0
  m_OcclusionCullingData: {fileID: 0}
--- !u!4 &62555683 stripped
Transform:
  m_CorrespondingSourceObject: {fileID: 180319434217191821, guid: 0f48f06ff1ceb490892217c1fb56ad67,
    type: 3}
  m_PrefabInstance: {fileID: 62555682}
";

pub const UNITY_EVENTS: &str = r"
+DOC
+MAP &1 <tag:unity3d.com,2011:29>
=VAL :OcclusionCullingSettings
+MAP
=VAL :m_ObjectHideFlags
=VAL :0
=VAL :m_OcclusionCullingData
+MAP
=VAL :fileID
=VAL :0
-MAP
-MAP
-MAP
-DOC
+DOC
+MAP &62555683 <tag:unity3d.com,2011:4>
=VAL :Transform
+MAP
=VAL :m_CorrespondingSourceObject
+MAP
=VAL :fileID
=VAL :180319434217191821
=VAL :guid
=VAL :0f48f06ff1ceb490892217c1fb56ad67
=VAL :type
=VAL :3
-MAP
=VAL :m_PrefabInstance
+MAP
=VAL :fileID
=VAL :62555682
-MAP
-MAP
-MAP
-DOC";

pub const SEQ_FLOW_INPUT: &str = r"[x, y]";

pub const SEQ_FLOW2_INPUT: &str = r"
[
  x,
  y,
]";

pub const SEQ_FLOW_EVENTS: &str = r"
+DOC
+SEQ
=VAL :x
=VAL :y
-SEQ
-DOC";

pub const MAP_FLOW_INPUT: &str = r"{a: 1, b: [x, y], c: {d: e}}";

pub const MAP_FLOW_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :1
=VAL :b
+SEQ
=VAL :x
=VAL :y
-SEQ
=VAL :c
+MAP
=VAL :d
=VAL :e
-MAP
-MAP
-DOC";

pub const FLOW_PAIR_IN_SEQ_INPUT: &str = r"[a: b, c, ? d]";

pub const FLOW_PAIR_IN_SEQ_EVENTS: &str = r"
+DOC
+SEQ
+MAP
=VAL :a
=VAL :b
-MAP
=VAL :c
+MAP
=VAL :d
=VAL :
-MAP
-SEQ
-DOC";

pub const FLOW_EMPTY_KEY_INPUT: &str = r"
{
    ? foo :,
    : bar,
}";

pub const FLOW_EMPTY_KEY_EVENTS: &str = r"
+DOC
+MAP
=VAL :foo
=VAL :
=VAL :
=VAL :bar
-MAP
-DOC";

pub const FLOW_INDICATOR_SCALAR_INPUT: &str = r"{a: :b, c: ?d}";

pub const FLOW_INDICATOR_SCALAR_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL ::b
=VAL :c
=VAL :?d
-MAP
-DOC";

pub const FLOW_IN_BLOCK_INPUT: &str = r"
&seq
- [name        , hr, avg  ]
- [Mark McGwire, 65, 0.278]
";

pub const FLOW_IN_BLOCK_EVENTS: &str = r"
+DOC
+SEQ &seq
+SEQ
=VAL :name
=VAL :hr
=VAL :avg
-SEQ
+SEQ
=VAL :Mark McGwire
=VAL :65
=VAL :0.278
-SEQ
-SEQ
-DOC";

pub const QUOTE_SINGLE_INPUT: &str = r"
- 'it''s'
- 'two
  lines'
";

pub const QUOTE_SINGLE_EVENTS: &str = r"
+DOC
+SEQ
=VAL 'it's
=VAL 'two lines
-SEQ
-DOC";

pub const QUOTE_DOUBLE_INPUT: &str = r#"
- "tab\there"
- "smile ☺"
- "folded
  line"
- "joined\
  line"
"#;

pub const QUOTE_DOUBLE_EVENTS: &str = "
+DOC
+SEQ
=VAL \"tab\\there
=VAL \"smile \u{263A}
=VAL \"folded line
=VAL \"joinedline
-SEQ
-DOC";

pub const QUOTE_KEY_INPUT: &str = r#"{"a":[1], 'b': 2}"#;

pub const QUOTE_KEY_EVENTS: &str = r#"
+DOC
+MAP
=VAL "a
+SEQ
=VAL :1
-SEQ
=VAL 'b
=VAL :2
-MAP
-DOC"#;

pub const ERR_MAP_THEN_SEQ_INPUT: &str = r"
a: 1
- b
";

pub const ERR_MAP_THEN_SEQ_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
ERR";

pub const ERR_SEQ_THEN_MAP_INPUT: &str = r"
- a
b: c
";

pub const ERR_SEQ_THEN_MAP_EVENTS: &str = r"
+DOC
+SEQ
ERR";

pub const ERR_UNCLOSED_FLOW_INPUT: &str = r"[a, b";

pub const ERR_UNCLOSED_FLOW_EVENTS: &str = r"
ERR";

pub const ERR_UNKNOWN_ALIAS_INPUT: &str = r"a: *x";

pub const ERR_UNKNOWN_ALIAS_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
ERR";

pub const ERR_UNTERMINATED_QUOTE_INPUT: &str = r#"key: "open"#;

pub const ERR_UNTERMINATED_QUOTE_EVENTS: &str = r"
+DOC
+MAP
ERR";

pub const TOKENS_PLAIN_INPUT: &str = r"a scaler";

pub const TOKENS_PLAIN: &str = r"+STR
:a scaler
-STR";

pub const TOKENS_FLOW_SEQ_INPUT: &str = r"[item 1, item 2, item 3]";

pub const TOKENS_FLOW_SEQ: &str = r"+STR
[
:item 1
,
:item 2
,
:item 3
]
-STR";

pub const TOKENS_FLOW_MAP_INPUT: &str = r"{
  a simple key: a value, # Note that the KEY token is produced.
  ? a complex key: another value,
}";

pub const TOKENS_FLOW_MAP: &str = r"+STR
{
KEY
:a simple key
VAL
:a value
,
KEY
:a complex key
VAL
:another value
,
}
-STR";

pub const TOKENS_BLOCK_SEQ_INPUT: &str = r"- item 1
- item 2
-
  - item 3.1
  - item 3.2
-
  key 1: value 1
  key 2: value 2";

pub const TOKENS_BLOCK_SEQ: &str = r"+STR
+BSEQ
ENT
:item 1
ENT
:item 2
ENT
+BSEQ
ENT
:item 3.1
ENT
:item 3.2
-BLK
ENT
+BMAP
KEY
:key 1
VAL
:value 1
KEY
:key 2
VAL
:value 2
-BLK
-BLK
-STR";

pub const TOKENS_BLOCK_MAP_INPUT: &str = r"a simple key: a value   # The KEY token is produced here.
? a complex key
: another value
a mapping:
  key 1: value 1
a sequence:
  - item 1";

pub const TOKENS_BLOCK_MAP: &str = r"+STR
+BMAP
KEY
:a simple key
VAL
:a value
KEY
:a complex key
VAL
:another value
KEY
:a mapping
VAL
+BMAP
KEY
:key 1
VAL
:value 1
-BLK
KEY
:a sequence
VAL
+BSEQ
ENT
:item 1
-BLK
-BLK
-STR";

pub const TOKENS_COMPACT_SEQ_INPUT: &str = r"key:
- item 1
- item 2";

pub const TOKENS_COMPACT_SEQ: &str = r"+STR
+BMAP
KEY
:key
VAL
ENT
:item 1
ENT
:item 2
-BLK
-STR";

pub const TOKENS_EMPTY_KEY_INPUT: &str = FLOW_EMPTY_KEY_INPUT;

pub const TOKENS_EMPTY_KEY: &str = r"+STR
{
KEY
:foo
VAL
,
VAL
:bar
,
}
-STR";

pub const TOKENS_PROPERTIES_INPUT: &str = r"%TAG !u! tag:unity3d.com,2011:
--- !u!29 &1
A: {fileID: 0}
B: *1
";

pub const TOKENS_PROPERTIES: &str = r"+STR
%TAG !u! tag:unity3d.com,2011:
---
<!u!29>
&1
+BMAP
KEY
:A
VAL
{
KEY
:fileID
VAL
:0
}
KEY
:B
VAL
*1
-BLK
-STR";

pub const TOKENS_BLOCK_SCALAR_INPUT: &str = r"- |
  literal
- >-
  folded
  text
";

pub const TOKENS_BLOCK_SCALAR: &str = r"+STR
+BSEQ
ENT
|literal\n
ENT
>folded text
-BLK
-STR";

pub const TOKENS_DOCUMENTS_INPUT: &str = r"---
'a scaler'
...
";

pub const TOKENS_DOCUMENTS: &str = r"+STR
---
'a scaler
...
-STR";

pub const COMPACT_SEQ_TAGGED_INPUT: &str = r"
key: !t
- a
- b
other: &s
- c
";

pub const COMPACT_SEQ_TAGGED_EVENTS: &str = r"
+DOC
+MAP
=VAL :key
+SEQ <!t>
=VAL :a
=VAL :b
-SEQ
=VAL :other
+SEQ &s
=VAL :c
-SEQ
-MAP
-DOC";

pub const EXPLICIT_KEY_SEQ_INPUT: &str = r"
? - a
  - b
: - c
";

pub const EXPLICIT_KEY_SEQ_EVENTS: &str = r"
+DOC
+MAP
+SEQ
=VAL :a
=VAL :b
-SEQ
+SEQ
=VAL :c
-SEQ
-MAP
-DOC";

pub const EXPLICIT_KEY_COMPACT_SEQ_INPUT: &str = r"
?
- a
: b
";

pub const EXPLICIT_KEY_COMPACT_SEQ_EVENTS: &str = r"
+DOC
+MAP
+SEQ
=VAL :a
-SEQ
=VAL :b
-MAP
-DOC";

pub const DOC_PROPERTIES_SCALAR_INPUT: &str = r"--- !!str foo
bar
--- &a foo
bar
";

pub const DOC_PROPERTIES_SCALAR_EVENTS: &str = r"
+DOC
=VAL <tag:yaml.org,2002:str> :foo bar
-DOC
+DOC
=VAL &a :foo bar
-DOC";

pub const ERR_INVALID_DEDENT_INPUT: &str = r"a:
  b: 1
 c: 2";

pub const ERR_INVALID_DEDENT_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
+MAP
=VAL :b
ERR";
