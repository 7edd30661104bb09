//! Plain headwords, one whitespace-separated block per alphabetic range.
//!
//! Entries are base forms plus a few lexicalised derivatives ("ability",
//! "capacity") that must not be cut down further. Inflected forms are absent:
//! the cascade is what maps them back here.

/// Headwords `a` through `d`.
pub(crate) const HEADWORDS_A_D: &str = r#"
aback abandon abase abate abbey abbot abbreviate abdicate abdomen abduct abide ability able abnormal
aboard abolish abort abound about above abrasive abroad abrupt absence absent absolute absolve
absorb abstain abstract absurd abundant abuse abyss academy accelerate accent accept access accident
acclaim accommodate accompany accomplish accord account accountant accumulate accurate accuse
accustom ace ache achieve acid acknowledge acorn acoustic acquaint acquire acquit acre acrobat
across act action active actor actual acute adapt add addict address adequate adhere adjacent
adjective adjust administer admiral admire admit adolescent adopt adore adorn adult advance
advantage adventure adverb adversary adverse advertise advice advise advocate aerial aeronautics
affair affect affection affirm afflict afford afraid after afternoon again against age agency agenda
agent aggravate aggregate aggress agile agitate agony agree agriculture ahead aid aim air aircraft
airline airport aisle alarm album alcohol alert algebra alien align alike alive all allege
allegiance alley alliance allocate allot allow alloy allude ally almanac almond almost alone along
aloud alphabet already also altar alter alternate although altitude altogether aluminum always
amateur amaze ambassador amber ambiguous ambition ambulance ambush amend amid among amount ample
amplify amuse analysis anchor ancient and anecdote angel anger angle angry anguish animal ankle
annex anniversary announce annoy annual anonymous another answer ant anthem anticipate antique
anxiety anxious any apart apartment ape apology apparatus apparent appeal appear appetite applaud
apple appliance apply appoint appraise appreciate apprehend approach appropriate approve approximate
apricot apron apt aquarium arbitrary arc arch architect archive arctic ardent area arena argue arid
arise arithmetic arm armor army aroma around arouse arrange array arrest arrive arrogant arrow art
artery article artifact artist ascend ash ashore aside ask asleep aspect assail assassin assault
assemble assert assess asset assign assist associate assume assure astonish astronomy asylum athlete
atlas atmosphere atom attach attack attain attempt attend attention attic attitude attorney attract
attribute auction audience audio audit aunt author authority auto autumn avail avenue average avert
aviation avoid await awake award aware away awe awful awkward axe axis axle baby bachelor back
backfill background bacon bacteria bad badge baffle bag baggage bait bake balance balcony bald ball
ballet balloon ballot bamboo ban banana band bandage bang banish bank banner banquet bar barbarous
barber bare bargain bark barn barrel barrier base basic basin basis basket bat batch bath bathe
batter battery battle bay beach beacon bead beak beam bean bear beard beast beat beautiful beauty
because become bed bee beef beer beetle before beg begin behalf behave behind being belief believe
bell belly belong below belt bench bend beneath benefit berry beside best bet betray better between
beverage beware beyond bias bible bicycle bid big bike bill bin bind biography biology bird birth
biscuit bishop bit bite bitter black blade blame bland blank blanket blast blaze bleach bleed blend
bless blind blink bliss block blond blood bloom blossom blow blue blunder blunt blur blush board
boast boat body boil bold bolt bomb bond bone bonus book boom boost boot booth border bore borrow
boss botany both bother bottle bottom bounce bound boundary bow bowl box boy brace bracket brain
brake branch brand brass brave bread breadth break breakfast breast breath breathe breed breeze brew
bribe brick bride bridge brief bright brilliant brim bring brisk brittle broad broadcast brook broom
brother brow brown brush brutal bubble bucket bud budget buffalo buffer build bulb bulk bull bullet
bump bunch bundle burden bureau burn burst bury bus bush business busy but butcher butter button buy
buzz cab cabbage cabin cabinet cable cage cake calculate calendar calf call calm calorie camel
camera camp campaign campus can canal cancel cancer candid candidate candle candy cane cannon canoe
canvas cap capable capacity capital captain capture car carbon card care career cargo carpet
carriage carrot carry cart carve case cash cast castle casual cat catalog catch category cater
cattle cause caution cave cease ceiling celebrate cell cellar cement censor census cent center
century ceremony certain chain chair chalk challenge chamber champion chance change channel chaos
chapel chapter character charge charity charm chart chase chat cheap cheat check cheek cheer cheese
chef chemical chemistry cherish cherry chess chest chew chicken chief child chill chimney chin chip
chocolate choice choir choke choose chop chorus church cigar circle circuit circus cite citizen city
civil claim clap clarify clash class classic clause claw clay clean clear clerk clever click client
cliff climate climb cling clinic clip clock close cloth cloud clown club clue cluster coach coal
coast coat code coffee coffin cognitive coil coin cold collapse collar colleague collect college
collide colony color column comb combat combine come comedy comfort command commence comment
commerce commission commit committee common communicate community compact companion company compare
compass compel compete compile complain complete complex comply compose compound comprehend compress
comprise compromise compute conceal concede conceive concentrate concept concern concert conclude
concrete condemn condition conduct confer confess confide confine confirm conflict conform confront
confuse congress connect conquer conscience conscious consent consequence conserve consider consist
console constant constitute construct consult consume contact contain contemplate contempt contend
content contest context continent continue contract contradict contrast contribute control convene
convenient convention converse convert convey convict convince cook cool cooperate cope copper copy
coral cord core corn corner corporate correct correspond corrupt cost costume cottage cotton couch
cough council counsel count counter country county couple courage course court cousin cover cow
coward crab crack craft crash crate crawl crazy cream create creature credit credulous creek creep
crew crime criminal crisis crisp criterion critic crop cross crowd crown crucial crude cruel cruise
crumble crush crust cry crystal cube cue culture cup cupboard cure curious curl currency current
curse curtain curve cushion custom customer cut cycle cylinder cynic dad daily dairy dam damage damp
dance danger dare dark darling dash data date daughter dawn day dead deaf deal dear death debate
debris debt decade decay deceive decide deck declare decline decorate decrease dedicate deed deem
deep deer default defeat defect defend defense deficit define definite degree delay delegate delete
deliberate delicate delight deliver demand democracy demon demonstrate denial dense dentist deny
depart depend deposit depress depth deputy derive descend describe desert deserve design desire desk
despair desperate despite dessert destine destroy detail detain detect deter determine develop
device devote diagnose diagram dial dialogue diamond diary dictate die diet differ different
difficult dig digest digit dignity dilemma dimension dine dinner dip diplomat direct dirt disappear
disaster discipline discount discover discuss disease dish dismiss disorder display dispose dispute
distance distant distinct distinguish distort distress distribute district disturb ditch dive
diverse divide divine do dock doctor doctrine document dog doll dollar dome domestic dominate donate
donkey door dose dot double doubt dough dove down dozen draft drag dragon drain drama draw drawer
dread dream dress drift drill drink drip drive drop drought drown drug drum dry duck due dull dumb
dump during dust duty dwarf dwell dye dynamic dynasty
"#;

/// Headwords `e` through `l`.
pub(crate) const HEADWORDS_E_L: &str = r#"
each eager eagle ear early earn earth ease east easy eat echo economy edge edit educate effect
efficient effort egg ego eight either elaborate elbow elder elect electric elegant element elephant
elevate eligible eliminate elite else embark embarrass embassy embody embrace emerge emergency emit
emotion emperor emphasis empire employ empty enable enact enclose encounter encourage end endorse
endure enemy energy enforce engage engine engineer enhance enjoy enlarge enlighten enormous enough
enrich enroll ensure enter enterprise entertain enthusiasm entire entitle entity entrance entry
envelope environment envy episode equal equip era erect erode errand error erupt escape escort essay
essence establish estate esteem estimate eternal ethic evaluate evaporate eve even evening event
ever every evidence evident evil evoke evolve exact exaggerate exam examine example exceed excel
except excess exchange excite exclaim exclude excuse execute exempt exercise exert exhaust exhibit
exile exist exit exotic expand expect expedition expel expend expense expensive experience
experiment expert expire explain explode exploit explore export expose express extend extent
external extinct extra extract extreme eye fable fabric face facet facilitate fact factor factory
faculty fade fail faint fair faith fake fall false fame familiar family famine famous fan fancy
fantasy far fare farm fascinate fashion fast fat fatal fate father fatigue fault favor fear feast
feat feather feature federal fee feeble feed feel fellow female fence ferry fertile festival fetch
fever few fiber fiction field fierce fight figure file fill film filter final finance find fine
finger finish fire firm first fish fist fit five fix flag flame flank flash flat flavor flaw flee
fleet flesh flex flight fling float flock flood floor flour flourish flow flower fluid flush fly
foam focus fog fold folk follow fond food fool foot for forbid force forecast forehead foreign
forest forever forge forget forgive fork form formal format former formula forth fortune forum
forward fossil foster found fountain four fox fraction fragile fragment frame france frank fraud
free freeze freight frequent fresh friction friend fright fringe frog from front frost frown fruit
frustrate fry fuel fulfill full fun function fund fundamental funeral fur furnace furnish furniture
further fury fuse fuss future gadget gain galaxy gallery gallon gallop gamble game gap garage garden
garlic garment gas gasp gate gather gauge gaze gear gem gender gene general generate generation
generous genius gentle genuine geography gesture get ghost giant gift ginger girl give glad glance
gland glare glass gleam glide glimpse globe gloom glory glove glow glue go goal goat god gold golf
good goose gorgeous gospel gossip govern government governor gown grab grace grade gradual graduate
grain grammar grand grant grape graph grasp grass grateful grave gravel gravity gray graze grease
great greed green greet grief grill grim grin grind grip groan grocery groom gross ground group grow
growl grudge guarantee guard guess guest guide guilt guitar gulf gum gun gust gut guy habit habitat
hail hair half hall halt ham hammer hand handle hang happen happy harbor hard hardly hardware harm
harmony harness harsh harvest haste hat hatch hate haul haunt have haven hawk hay hazard head heal
health heap hear heart heat heaven heavy hedge heel height heir hell hello helmet help hen herald
herb herd here heritage hero hesitate hide high highway hike hill hint hip hire history hit hobby
hold hole holiday hollow holy home honest honey honor hook hope horizon horn horror horse hose
hospital host hostile hot hotel hour house hover how however hue huge human humble humor hundred
hunger hunt hurry hurt husband hut hybrid hydrogen hymn hypothesis ice icon idea ideal identical
identify identity idiom idle ignite ignore ill illusion illustrate image imagine imitate immense
immigrant immune impact impair impart impatient imperial implement implicit imply import impose
impress imprison improve impulse inch incident incline include income increase incur indeed index
indicate indifferent indigenous individual induce indulge industry inevitable infant infect infer
inferior infinite inflate inflict influence inform ingredient inhabit inherit inhibit initial
initiate inject injure ink inland inn inner innocent innovate input inquire insect insert inside
insight insist inspect inspire install instance instant instead instinct institute instruct
instrument insult insure intact integrate intellect intend intense intent interact interest
interfere interior internal interpret interrupt interval intervene interview intimate introduce
invade invent invest investigate invite invoke involve iron irony island isolate issue italy item
ivory jacket jail jam jar jaw jazz jealous jeans jelly jet jewel job join joint joke journal journey
joy judge juice jump jungle junior jury just justice justify keen keep kernel kettle key kick kid
kidney kill kind king kingdom kiss kit kitchen kite knee kneel knife knight knit knob knock knot
know knowledge label labor laboratory lace lack ladder lady lake lamb lamp land landscape lane
language lap large laser last late latter laugh launch laundry lava law lawn lawyer lay layer lazy
lead leaf league leak lean leap learn lease least leather leave lecture left leg legal legend
legislate leisure lemon lend length lens less lesson let letter level lever levy liable liberal
liberty library license lick lid lie life lift light like limb limit limp line linen linger link
lion lip liquid list listen literal literature little live liver load loaf loan lobby local locate
lock lodge log logic lonely long look loop loose lord lose loss lot loud lounge love low loyal luck
lumber lump lunch lung lure lust luxury lyric
"#;

/// Headwords `m` through `r`.
pub(crate) const HEADWORDS_M_R: &str = r#"
machine mad magazine magic magnet magnificent maid mail main maintain majesty major make male mammal
man manage mandate maneuver manifest manipulate mankind manner manor manual manufacture manuscript
many map marble march margin marine mark market marriage marry marsh marvel mask mass massive master
match mate material mathematics matter mature maximum may mayor meadow meal mean measure meat
mechanic medal media mediate medicine medium meet melody melt member memory menace mend mental
mention menu merchant mercy mere merge merit merry mess message metal metaphysics method middle
midst might mild mile military milk mill mind mine mineral minimum minister minor minute miracle
mirror miscarry mischief miser misery miss missile mission mist mistake mix mob mobile mock mode
model moderate modern modest modify moist mold moment monarch money monitor monk monkey monopoly
monster month monument mood moon moral more moreover morning mortal mortgage mosquito moss most
mother motion motive motor mount mountain mourn mouse mouth move much mud multiply murder muscle
museum music must mutter mutual mystery myth nail naive naked name narrate narrow nasty nation
native nativity nature naughty navy nazi near neat necessary neck need needle negative neglect
negotiate neighbor neither nephew nerve nest net network neutral never new news next nice niche
nickel niece night nine noble nod noise nominate none nonsense noon nor norm normal north nose
notable notch note nothing notice notion noun nourish novel now nuclear nuisance number nurse nut
nutrient oak oath obey object oblige obscure observe obsess obstacle obtain obvious occasion occupy
occur ocean odd odor offend offer office officer official offset often oil old olive omit once one
onion only onset open opera operate opinion oppose opposite oppress optic optimum option oral orange
orbit orchestra ordain order ordinary organ organize orient origin ornament orphan other ought ounce
out outcome outfit outline output outrage outside oval oven over overcome overlap overlook overseas
overt owe own oxygen pace pack package pact pad page pain paint pair palace pale palm pan panel
panic paper parade paradise paragraph parallel parcel pardon parent park parliament part partial
participate particle particular partner party pass passage passenger passion passive past paste
pastor pat patch patent path patient patrol pattern pause pave paw pay peace peach peak pearl
peasant peculiar pedal peel peer pen penalty pencil penetrate people pepper perceive percent perfect
perform perfume perhaps peril period perish permanent permit perpetual persist person persuade pest
pet petrol petty phase phenomenon philosophical philosophy phone photograph phrase physics piano
pick picture pie piece pierce pig pigeon pile pill pillar pillow pilot pin pinch pine pink pint
pioneer pipe pirate pistol pit pitch pity place plague plain plan planet plank plant plaster plate
platform play plea plead pleasant please pledge plenty plot plow pluck plug plum plunge plus pocket
poem poet point poison pole police policy polish polite politics poll pollute pond pony pool poor
pop popular population porch pork port portion portrait pose position positive possess possible post
pot potato pottery pound pour poverty powder power practice praise pray preach precede precious
precise predict prefer pregnant prejudice premise prepare prescribe presence present preserve
preside press pressure prestige presume pretend pretty prevail prevent previous prey price pride
priest primary prime prince principal principle print prior prison private prize probable probe
problem proceed process proclaim produce profess profession profit program progress prohibit project
prolong prominent promise promote prompt pronounce proof propaganda proper property prophet
proportion propose prose prosecute prospect prosper protect protein protest proud prove provide
province provoke prudent public publish pull pulse pump punch punish pupil puppet purchase pure
purple purpose purse pursue push put puzzle pyramid qualify quality quantity quarrel quarter queen
quest question queue quick quiet quilt quit quota quote rabbit race rack radar radiate radical radio
rage raid rail rain raise rally ranch random range rank rapid rare rat rate rather ratio rational
raw ray reach react read ready real realm reap rear reason rebel recall recede receipt receive
recent recess recipe recite reckon recognize recommend reconcile record recover recruit rectify
recur red reduce refer refine reflect reform refrain refresh refuge refuse regard regime region
register regret regular regulate rehearse reign reinforce reject rejoice relate relax relay release
relevant reliable relief relieve religion reluctant rely remain remark remedy remember remind remote
remove render renew rent repair repeat repel replace reply report represent reproduce republic
reputation request require rescue research resemble resent reserve reside resign resist resolve
resort resource respect respond rest restaurant restore restrain restrict result resume retail
retain retire retreat return reveal revenge revenue reverse review revise revive revolt reward rhyme
rhythm rib ribbon rice rich rid riddle ride ridge rifle right rigid ring riot rip rise risk ritual
rival river road roam roar roast rob robe robot rock rod role roll romance roof room root rope rose
rot rotate rough round route routine row royal rub rubber rubbish rude rug ruin rule rumor run rural
rush rust
"#;

/// Headwords `s` through `z`.
pub(crate) const HEADWORDS_S_Z: &str = r#"
sack sacred sacrifice sad saddle safe sail saint sake salad salary sale salmon salt salute same
sample sanction sand sane satellite satisfy sauce savage save saw say scale scan scandal scar scarce
scare scatter scene scent schedule scheme scholar school science scissors scold scope score scorn
scout scramble scrap scrape scratch scream screen screw script sculpture sea seal search season seat
second secret secretary section sector secure see seed seek seem segment seize seldom select self
sell senate send senior sense sensitive sentence separate sequence series serious sermon servant
serve session set settle seven severe sew shade shadow shaft shake shallow shame shape share shark
sharp shatter shave shed sheep sheet shelf shell shelter shield shift shine ship shirt shock shoe
shoot shop shore short shot should shoulder shout shove show shower shrink shrug shut shy sick side
siege sigh sight sign signal silence silk silly silver similar simple sin since sincere sing single
sink sister sit site situate six size sketch ski skill skin skirt skull sky slave sleep sleeve
slender slice slide slight slim slip slope slot slow small smart smash smell smile smoke smooth
snake snap snow soak soap soar sober social society sock soft soil soldier sole solemn solid
solitary solve some son song soon sore sorrow sorry sort soul sound soup sour source south sovereign
space spare spark speak spear special species specific specify spectacle speech speed spell spend
sphere spice spider spill spin spine spirit spit spite splendid split spoil sponsor spontaneous
spoon sport spot spouse spray spread spring spy squad square squeeze stable stack staff stage stain
stair stake stale stall stamp stand standard star stare start starve state station statue status
stay steady steal steam steel steep steer stem step stick stiff still stimulate sting stir stock
stomach stone stool stop store storm story stove straight strain strange stranger strategy straw
stream street strength stress stretch strict stride strike string strip stripe strive stroke strong
structure struggle student study stuff stumble stupid style subject submit subsidy substance
substitute subtle suburb succeed success such suck sudden sue suffer sufficient sugar suggest suit
sum summer summit sun super superior supply support suppose supreme sure surface surge surgeon
surplus surprise surrender surround survey survive suspect suspend sustain swallow swamp swan swarm
sway swear sweat sweep sweet swell swift swim swing switch sword symbol sympathy symptom syndrome
system table tablet tackle tactic tail tailor take tale talent talk tall tame tan tank tap tape
target task taste tax tea teach team tear tease technical technique technology teen telephone
telescope tell temper temple temporary tempt ten tenant tend tender tennis tense tension tent term
terminal terrible territory terror test text than thank that the theater theft theme then theory
therapy there thesis thick thief thigh thin thing think third thirst this thorn thorough though
thought thread threat three thrill throat throne through throw thrust thumb thunder ticket tide tidy
tie tiger tight tile till timber time timid tin tiny tip tire tissue title toast today toe together
toil toilet token tolerate toll tomato tomb tone tongue tonight too tool tooth top topic torch
torture toss total touch tough tour toward towel tower town toy trace track trade tradition traffic
tragedy trail train trait traitor transfer transform transit translate transmit transport trap
travel tray treasure treat treaty tree tremble trend trial tribe trick trigger trim trip triumph
troop trophy trouble truck true trunk trust truth try tube tune tunnel turn turtle tutor twelve
twenty twice twin twist two type typical ugly ultimate umbrella unable unanimous uncle under undergo
understand undo uniform unify union unique unit unite universe university unless until unusual up
update upgrade uphold upon upper upset urban urge urgent usage use usual utility utter vacant
vacation vacuum vague vain valid valley value valve van vanish vapor variety various vast vault
vehicle veil vein velvet vendor venture verb verdict verge verify verse version versus vessel
veteran veto via vibrate vice victim victory vie view vigor village villain vine violate violent
violin virtue virus visible vision visit visual vital vivid vocal voice void volcano volume
volunteer voracious vote vow vowel voyage wage wagon waist wait wake walk wall wallet wander want
war ward warm warn warrant wash waste watch water wave wax way weak wealth weapon wear weather weave
web wedding weed week weep weigh weight weird welcome welfare well west wet whale what wheat wheel
when where whether which while whip whisper whistle white whole why wicked wide widow width wife
wild will win wind window wine wing winter wipe wire wise wish wit witch with withdraw within
without witness wolf woman wonder wood wool word work world worm worry worship worth would wound
wrap wrath wreck wrestle wrist write wrong yard yarn yawn year yeast yell yellow yes yesterday yet
yield young youth zeal zebra zero zinc zone zoo
"#;

pub(crate) const HEADWORD_PARTITIONS: &[&str] = &[HEADWORDS_A_D, HEADWORDS_E_L, HEADWORDS_M_R, HEADWORDS_S_Z];
